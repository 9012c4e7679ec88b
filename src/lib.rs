pub mod chat_init;
pub mod cli;
pub mod config;
pub mod llm;
pub mod models;
pub mod server;
pub mod utils;

use chat_init::ChatInitService;
use cli::Args;
use config::prompt::{ load_prompts, PromptConfig };
use llm::chat::{ new_client as new_chat_client, ChatClient };
use llm::LlmConfig;
use log::info;
use server::Server;
use std::error::Error;
use std::sync::Arc;

fn initialize_llm_client(
    args: &Args
) -> Result<Option<Arc<dyn ChatClient>>, Box<dyn Error + Send + Sync>> {
    if !args.enable_llm {
        info!("Chat LLM client disabled");
        return Ok(None);
    }

    let chat_api_key = if !args.chat_api_key.is_empty() {
        Some(args.chat_api_key.clone())
    } else {
        None
    };
    let chat_config = LlmConfig {
        llm_type: args.chat_llm_type.parse()?,
        base_url: args.chat_base_url.clone(),
        api_key: chat_api_key,
        completion_model: args.chat_model.clone(),
    };
    let chat_client = new_chat_client(&chat_config)?;
    info!(
        "Chat client configured: Type={}, Model={}, BaseURL={:?}",
        chat_config.llm_type,
        chat_client.get_model(),
        chat_client.get_base_url()
    );
    Ok(Some(chat_client))
}

pub fn build_service(args: &Args) -> Result<ChatInitService, Box<dyn Error + Send + Sync>> {
    let llm_client = initialize_llm_client(args)?;
    let prompt_config = match &args.prompts_path {
        Some(path) => load_prompts(path).map_err(|e|
            format!("Failed to load prompts file '{}': {}", path, e)
        )?,
        None => Arc::new(PromptConfig::default()),
    };
    Ok(ChatInitService::with_prompts(llm_client, prompt_config))
}

pub async fn run(args: Args) -> Result<(), Box<dyn Error + Send + Sync>> {
    info!("--- Core Configuration ---");
    info!("Server Address: {}", args.server_addr);
    info!("Chat LLM Enabled: {}", args.enable_llm);
    if args.enable_llm {
        info!("Chat LLM Type: {}", args.chat_llm_type);
    }
    info!("Prompts Path: {}", args.prompts_path.as_deref().unwrap_or("built-in"));
    info!("-------------------------");

    let service = Arc::new(build_service(&args)?);
    if let Some(client) = service.llm_client() {
        info!("Chat init service holds LLM client for model {}", client.get_model());
    }
    let server = Server::new(args.server_addr.clone(), service, args.server_api_key.clone());
    server.run().await?;

    Ok(())
}
