use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    // --- Chat LLM Provider Args ---
    /// Attach a chat LLM client to the chat init service
    #[arg(long, env = "ENABLE_LLM", default_value = "false")]
    pub enable_llm: bool,

    /// Type of LLM provider for chat completion (ollama, openai)
    #[arg(long, env = "CHAT_LLM_TYPE", default_value = "ollama")]
    pub chat_llm_type: String,

    /// Base URL for the Chat LLM provider API (e.g., http://localhost:11434 for Ollama)
    #[arg(long, env = "CHAT_BASE_URL")] // No default, let adapters handle defaults if None
    pub chat_base_url: Option<String>,

    /// API Key for the Chat LLM provider (e.g., OpenAI)
    #[arg(long, env = "CHAT_API_KEY", default_value = "")]
    pub chat_api_key: String,

    /// Model name for chat completion (e.g., gpt-4o, llama3)
    #[arg(long, env = "CHAT_MODEL")] // No default, rely on adapter defaults if None
    pub chat_model: Option<String>,

    // --- General App Args ---
    /// Enable debug logging/output
    #[arg(long, env = "DEBUG", default_value = "false")]
    pub debug: bool,

    /// Optional JSON file overriding the intro message templates.
    #[arg(long, env = "PROMPTS_PATH")]
    pub prompts_path: Option<String>,

    /// Host address and port for the server to listen on.
    #[arg(long, env = "SERVER_ADDR", default_value = "127.0.0.1:8000")]
    pub server_addr: String,

    /// Optional API Key required for clients to call the HTTP API. If set, clients must send it in `x-api-key`.
    #[arg(long, env = "SERVER_API_KEY")]
    pub server_api_key: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_leave_llm_detached() {
        let args = Args::try_parse_from(["chat-init-service"]).unwrap();
        assert!(!args.enable_llm);
        assert_eq!(args.chat_llm_type, "ollama");
        assert_eq!(args.server_addr, "127.0.0.1:8000");
        assert!(args.prompts_path.is_none());
    }

    #[test]
    fn flags_override_defaults() {
        let args = Args::try_parse_from([
            "chat-init-service",
            "--enable-llm",
            "--chat-llm-type",
            "openai",
            "--server-api-key",
            "secret",
        ]).unwrap();
        assert!(args.enable_llm);
        assert_eq!(args.chat_llm_type, "openai");
        assert_eq!(args.server_api_key.as_deref(), Some("secret"));
    }
}
