use async_trait::async_trait;
use log::debug;
use reqwest::{ Client as HttpClient, header::{ HeaderMap, HeaderValue, AUTHORIZATION } };
use serde::{ Deserialize, Serialize };
use std::error::Error as StdError;

use super::{ post_json, ChatClient, CompletionResponse };
use crate::llm::{ LlmConfig, LlmType };

pub const DEFAULT_OPENAI_MODEL: &str = "gpt-4o";
pub const DEFAULT_OPENAI_URL: &str = "https://api.openai.com";

/// Client for OpenAI and servers exposing the same `/v1/chat/completions` route.
pub struct OpenAIChatClient {
    http: HttpClient,
    model: String,
    base_url: String,
}

#[derive(Serialize, Deserialize)]
struct ChatTurn {
    role: String,
    content: String,
}

#[derive(Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: Vec<ChatTurn>,
    temperature: f32,
    max_completion_tokens: u32,
    store: bool,
}

#[derive(Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<ChatCompletionChoice>,
}

#[derive(Deserialize)]
struct ChatCompletionChoice {
    message: ChatTurn,
}

impl OpenAIChatClient {
    pub fn new(
        api_key: &str,
        model: Option<String>,
        base_url: Option<String>
    ) -> Result<Self, Box<dyn StdError + Send + Sync>> {
        let mut auth = HeaderValue::from_str(&format!("Bearer {}", api_key))
            .map_err(|e| format!("Invalid API key format: {}", e))?;
        auth.set_sensitive(true);
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, auth);

        let http = HttpClient::builder().default_headers(headers).build()?;

        Ok(Self {
            http,
            model: model.unwrap_or_else(|| DEFAULT_OPENAI_MODEL.to_string()),
            base_url: base_url.unwrap_or_else(|| DEFAULT_OPENAI_URL.to_string()),
        })
    }

    pub fn from_config(config: &LlmConfig) -> Result<Self, Box<dyn StdError + Send + Sync>> {
        if config.llm_type != LlmType::OpenAI {
            return Err(format!("OpenAIChatClient cannot be built for '{}'", config.llm_type).into());
        }
        let api_key = config.api_key
            .as_deref()
            .filter(|k| !k.trim().is_empty())
            .ok_or("OpenAI API key is required")?;

        Self::new(api_key, config.completion_model.clone(), config.base_url.clone())
    }

    fn completions_url(&self) -> String {
        format!("{}/v1/chat/completions", self.base_url.trim_end_matches('/'))
    }
}

#[async_trait]
impl ChatClient for OpenAIChatClient {
    async fn complete(
        &self,
        prompt: &str
    ) -> Result<CompletionResponse, Box<dyn StdError + Send + Sync>> {
        let body = ChatCompletionRequest {
            model: &self.model,
            messages: vec![ChatTurn { role: "user".into(), content: prompt.to_string() }],
            temperature: 1.0,
            max_completion_tokens: 2048,
            store: false,
        };
        let reply: ChatCompletionResponse = post_json(&self.http, &self.completions_url(), &body).await?;
        let choice = reply.choices
            .into_iter()
            .next()
            .ok_or("Chat completion returned no choices")?;
        debug!("OpenAI model {} returned {} chars", self.model, choice.message.content.len());

        Ok(CompletionResponse { response: choice.message.content })
    }

    fn get_model(&self) -> String {
        self.model.clone()
    }

    fn get_base_url(&self) -> Option<String> {
        Some(self.base_url.clone())
    }
}
