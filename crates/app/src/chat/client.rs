//! HTTP client for an OpenAI-compatible chat completions API.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::chat::{
    data::{ChatMessage, ChatRole},
    errors::ChatServiceError,
    service::ChatService,
};

/// Standing instructions prepended to every conversation.
const SYSTEM_PROMPT: &str = "You are the official IT support assistant for this \
company. You are friendly, competent and solution-oriented. Answer briefly and \
precisely, do not invent information, and refer unresolved issues to the \
support desk.";

/// Configuration for connecting to a chat completions service.
#[derive(Debug, Clone)]
pub struct ChatCompletionsConfig {
    /// API base address, e.g. an OpenAI-compatible `/v1beta/openai` endpoint.
    pub endpoint: String,

    /// Bearer token for the upstream service.
    pub api_key: String,

    /// Model identifier to request completions from.
    pub model: String,
}

/// HTTP client implementing [`ChatService`] against an OpenAI-compatible API.
#[derive(Debug, Clone)]
pub struct HttpChatClient {
    config: ChatCompletionsConfig,
    http: Client,
}

impl HttpChatClient {
    /// Create a new client from the given configuration.
    #[must_use]
    pub fn new(config: ChatCompletionsConfig) -> Self {
        Self {
            config,
            http: Client::new(),
        }
    }
}

#[async_trait]
impl ChatService for HttpChatClient {
    async fn complete(&self, messages: Vec<ChatMessage>) -> Result<String, ChatServiceError> {
        if messages.is_empty() {
            return Err(ChatServiceError::EmptyConversation);
        }

        let url = format!("{}/chat/completions", self.config.endpoint);

        let body = CompletionRequest {
            model: &self.config.model,
            messages: build_wire_messages(&messages),
        };

        let response = self
            .http
            .post(&url)
            .bearer_auth(&self.config.api_key)
            .json(&body)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();

            return Err(ChatServiceError::UnexpectedResponse(format!(
                "completion request failed with status {status}: {text}"
            )));
        }

        let parsed: CompletionResponse = response.json().await?;

        parsed
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or_else(|| {
                ChatServiceError::UnexpectedResponse("response contained no choices".to_string())
            })
    }
}

fn build_wire_messages(messages: &[ChatMessage]) -> Vec<WireMessage<'_>> {
    let mut wire = Vec::with_capacity(messages.len() + 1);

    wire.push(WireMessage {
        role: "system",
        content: SYSTEM_PROMPT,
    });

    for message in messages {
        wire.push(WireMessage {
            role: match message.role {
                ChatRole::User => "user",
                ChatRole::Assistant => "assistant",
            },
            content: &message.text,
        });
    }

    wire
}

#[derive(Debug, Serialize)]
struct CompletionRequest<'a> {
    model: &'a str,
    messages: Vec<WireMessage<'a>>,
}

#[derive(Debug, Serialize)]
struct WireMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct CompletionResponse {
    choices: Vec<CompletionChoice>,
}

#[derive(Debug, Deserialize)]
struct CompletionChoice {
    message: CompletionMessage,
}

#[derive(Debug, Deserialize)]
struct CompletionMessage {
    content: String,
}
