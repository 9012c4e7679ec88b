use async_trait::async_trait;
use log::debug;
use reqwest::Client as HttpClient;
use serde::{ Deserialize, Serialize };
use std::error::Error as StdError;

use super::{ post_json, ChatClient, CompletionResponse };
use crate::llm::{ LlmConfig, LlmType };

pub const DEFAULT_OLLAMA_MODEL: &str = "cogito:3b";
pub const DEFAULT_OLLAMA_URL: &str = "http://localhost:11434";

#[derive(Debug)]
pub struct OllamaClient {
    http: HttpClient,
    base_url: String,
    model: String,
}

#[derive(Serialize)]
struct OllamaGenerateRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    stream: bool,
}

#[derive(Deserialize)]
struct OllamaGenerateResponse {
    response: String,
}

impl OllamaClient {
    pub fn new(base_url: Option<String>, model: Option<String>) -> Self {
        Self {
            http: HttpClient::new(),
            base_url: base_url.unwrap_or_else(|| DEFAULT_OLLAMA_URL.to_string()),
            model: model.unwrap_or_else(|| DEFAULT_OLLAMA_MODEL.to_string()),
        }
    }

    pub fn from_config(config: &LlmConfig) -> Result<Self, Box<dyn StdError + Send + Sync>> {
        if config.llm_type != LlmType::Ollama {
            return Err(format!("OllamaClient cannot be built for '{}'", config.llm_type).into());
        }
        Ok(Self::new(config.base_url.clone(), config.completion_model.clone()))
    }

    fn generate_url(&self) -> String {
        format!("{}/api/generate", self.base_url.trim_end_matches('/'))
    }
}

#[async_trait]
impl ChatClient for OllamaClient {
    async fn complete(
        &self,
        prompt: &str
    ) -> Result<CompletionResponse, Box<dyn StdError + Send + Sync>> {
        let body = OllamaGenerateRequest {
            model: &self.model,
            prompt,
            stream: false,
        };
        let reply: OllamaGenerateResponse = post_json(&self.http, &self.generate_url(), &body).await?;
        debug!("Ollama model {} returned {} chars", self.model, reply.response.len());
        Ok(CompletionResponse { response: reply.response })
    }

    fn get_model(&self) -> String {
        self.model.clone()
    }

    fn get_base_url(&self) -> Option<String> {
        Some(self.base_url.clone())
    }
}
