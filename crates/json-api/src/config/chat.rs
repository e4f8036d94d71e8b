//! Chat Completion Upstream Config

use clap::Args;
use helpdesk_app::chat::client::ChatCompletionsConfig;

/// Chat completion upstream settings.
#[derive(Debug, Args)]
pub struct ChatConfig {
    /// OpenAI-compatible chat completions base URL
    #[arg(
        long,
        env = "CHAT_ENDPOINT",
        default_value = "https://generativelanguage.googleapis.com/v1beta/openai"
    )]
    pub chat_endpoint: String,

    /// API key for the chat completions upstream
    #[arg(long, env = "CHAT_API_KEY")]
    pub chat_api_key: String,

    /// Model identifier to request
    #[arg(long, env = "CHAT_MODEL", default_value = "gemini-2.5-flash")]
    pub chat_model: String,
}

impl ChatConfig {
    /// Convert into the client configuration used by the chat service.
    #[must_use]
    pub fn completions_config(&self) -> ChatCompletionsConfig {
        ChatCompletionsConfig {
            endpoint: self.chat_endpoint.clone(),
            api_key: self.chat_api_key.clone(),
            model: self.chat_model.clone(),
        }
    }
}
