use crate::config::prompt::{
    self,
    PromptConfig,
    PromptError,
};
use crate::llm::chat::ChatClient;
use crate::models::chat::{ BackendChat, BackendMessage, CharacterInfo };
use crate::models::simulation::{ GenerateChatMessagesRequest, GenerateChatMessagesResponse };
use crate::utils::id::generate_message_id;

use log::{ info, error };
use serde_json::{ Map, Value as JsonValue };
use std::sync::Arc;
use thiserror::Error;

pub const COORDINATOR_ID: i64 = 1;
pub const COORDINATOR_NAME: &str = "AI Coordinator";

// Placeholders until the backend resolves real skill and simulation rows.
pub const PLACEHOLDER_SKILL_ID: i64 = 1;
pub const PLACEHOLDER_SIMULATION_ID: i64 = 1;

#[derive(Debug, Error)]
pub enum ChatInitError {
    #[error("intro template error: {0}")]
    Template(#[from] PromptError),
}

#[derive(Clone)]
pub struct ChatInitService {
    llm_client: Option<Arc<dyn ChatClient>>,
    prompt_config: Arc<PromptConfig>,
}

impl ChatInitService {
    pub fn new(llm_client: Option<Arc<dyn ChatClient>>) -> Self {
        Self::with_prompts(llm_client, Arc::new(PromptConfig::default()))
    }

    pub fn with_prompts(
        llm_client: Option<Arc<dyn ChatClient>>,
        prompt_config: Arc<PromptConfig>
    ) -> Self {
        Self { llm_client, prompt_config }
    }

    /// The completion backend handed in at construction. Chat initialization
    /// does not call it yet.
    pub fn llm_client(&self) -> Option<&Arc<dyn ChatClient>> {
        self.llm_client.as_ref()
    }

    pub async fn generate_initial_chat(
        &self,
        request: &GenerateChatMessagesRequest
    ) -> Result<GenerateChatMessagesResponse, ChatInitError> {
        info!("Generating initial chat messages for simulation: {}", request.simulation.name);

        self.build_initial_chat(request).map_err(|e| {
            error!("Chat initialization failed: {}", e);
            e
        })
    }

    fn build_initial_chat(
        &self,
        request: &GenerateChatMessagesRequest
    ) -> Result<GenerateChatMessagesResponse, ChatInitError> {
        let simulation = &request.simulation;
        let user = &request.user;

        let contents = [
            prompt::get_welcome_message(
                &self.prompt_config,
                &user.name,
                &simulation.name,
                &simulation.variables
            )?,
            prompt::get_briefing_message(&self.prompt_config, &simulation.description)?,
            prompt::get_call_to_action_message(&self.prompt_config)?,
        ];

        let messages: Vec<BackendMessage> = contents
            .into_iter()
            .map(|content| BackendMessage::text(generate_message_id(), coordinator(), content))
            .collect();

        let mut metadata = Map::new();
        metadata.insert("simulation".into(), JsonValue::from(simulation.name.clone()));
        metadata.insert("user".into(), JsonValue::from(user.name.clone()));
        metadata.insert("messages_count".into(), JsonValue::from(messages.len()));

        let chat = BackendChat {
            chat_id: None,
            skill_id: PLACEHOLDER_SKILL_ID,
            simulation_id: PLACEHOLDER_SIMULATION_ID,
            messages,
            success: true,
        };

        Ok(GenerateChatMessagesResponse { chat, metadata })
    }
}

fn coordinator() -> CharacterInfo {
    CharacterInfo {
        id: COORDINATOR_ID,
        name: COORDINATOR_NAME.to_string(),
        avatar: None,
    }
}
