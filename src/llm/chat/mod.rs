pub mod ollama;
pub mod openai;

use async_trait::async_trait;
use reqwest::Client as HttpClient;
use serde::{ de::DeserializeOwned, Deserialize, Serialize };
use std::error::Error as StdError;
use std::sync::Arc;
use super::{ LlmConfig, LlmType };
use self::ollama::OllamaClient;
use self::openai::OpenAIChatClient;

#[derive(Deserialize, Debug, Clone)]
pub struct CompletionResponse {
    pub response: String,
}

/// A text-completion backend. Chat initialization accepts one so that
/// generated openings can replace the fixed templates later on.
#[async_trait]
pub trait ChatClient: Send + Sync {
    async fn complete(
        &self,
        prompt: &str
    ) -> Result<CompletionResponse, Box<dyn StdError + Send + Sync>>;

    fn get_model(&self) -> String;
    fn get_base_url(&self) -> Option<String>;
}

async fn post_json<B, R>(
    http: &HttpClient,
    url: &str,
    body: &B
) -> Result<R, Box<dyn StdError + Send + Sync>>
    where B: Serialize + ?Sized, R: DeserializeOwned
{
    let resp = http.post(url).json(body).send().await?.error_for_status()?;
    Ok(resp.json::<R>().await?)
}

pub fn new_client(
    config: &LlmConfig
) -> Result<Arc<dyn ChatClient>, Box<dyn StdError + Send + Sync>> {
    let client: Arc<dyn ChatClient> = match config.llm_type {
        LlmType::Ollama => {
            let specific_client = OllamaClient::from_config(config)?;
            Arc::new(specific_client)
        }
        LlmType::OpenAI => {
            let specific_client = OpenAIChatClient::from_config(config)?;
            Arc::new(specific_client)
        }
    };
    Ok(client)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_ollama_client_with_defaults() {
        let client = new_client(&LlmConfig::default()).unwrap();
        assert_eq!(client.get_model(), "cogito:3b");
        assert_eq!(client.get_base_url().as_deref(), Some("http://localhost:11434"));
    }

    #[test]
    fn openai_client_requires_api_key() {
        let config = LlmConfig {
            llm_type: LlmType::OpenAI,
            ..LlmConfig::default()
        };
        assert!(new_client(&config).is_err());
    }

    #[test]
    fn builds_openai_client_with_key() {
        let config = LlmConfig {
            llm_type: LlmType::OpenAI,
            api_key: Some("sk-test".into()),
            completion_model: Some("gpt-4o-mini".into()),
            base_url: None,
        };
        let client = new_client(&config).unwrap();
        assert_eq!(client.get_model(), "gpt-4o-mini");
    }
}
