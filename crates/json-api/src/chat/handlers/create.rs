//! Chat Completion Handler
//!
//! Relays a conversation to the upstream completion service. The frontend
//! sends roles as free-form strings ("user", "ai", "assistant"); anything
//! unrecognised is dropped rather than rejected.

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use helpdesk_app::chat::data::{ChatMessage, ChatRole};

use crate::{chat::errors::into_status_error, extensions::*, meta::OperationMeta, state::State};

/// Chat Message Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ChatMessageRequest {
    /// Who authored the message: "user", "ai" or "assistant"
    pub role: String,

    /// The message text
    pub text: String,
}

/// Chat Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ChatRequest {
    /// Conversation history, oldest first
    pub messages: Vec<ChatMessageRequest>,
}

/// Chat Reply Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ChatReplyResponse {
    /// The assistant's reply
    pub reply: String,
}

/// Chat Reply Envelope
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ChatReplyEnvelope {
    /// Operation outcome summary
    pub meta: OperationMeta,

    /// The reply
    pub data: ChatReplyResponse,
}

fn parse_role(role: &str) -> Option<ChatRole> {
    match role.to_ascii_lowercase().as_str() {
        "user" => Some(ChatRole::User),
        "ai" | "assistant" => Some(ChatRole::Assistant),
        _ => None,
    }
}

fn into_messages(messages: Vec<ChatMessageRequest>) -> Vec<ChatMessage> {
    messages
        .into_iter()
        .filter_map(|message| {
            parse_role(&message.role).map(|role| ChatMessage {
                role,
                text: message.text,
            })
        })
        .collect()
}

/// Chat Completion Handler
#[endpoint(
    tags("chat"),
    summary = "Chat Completion",
    responses(
        (status_code = StatusCode::OK, description = "Reply generated"),
        (status_code = StatusCode::BAD_REQUEST, description = "Conversation cannot be empty"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<ChatRequest>,
    depot: &mut Depot,
) -> Result<Json<ChatReplyEnvelope>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let reply = state
        .app
        .chat
        .complete(into_messages(json.into_inner().messages))
        .await
        .map_err(into_status_error)?;

    Ok(Json(ChatReplyEnvelope {
        meta: OperationMeta::succeeded(1),
        data: ChatReplyResponse { reply },
    }))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::json;
    use testresult::TestResult;

    use helpdesk_app::chat::{ChatServiceError, MockChatService};

    use crate::test_helpers::chat_service;

    use super::*;

    fn make_service(chat: MockChatService) -> Service {
        chat_service(chat, Router::with_path("chat").post(handler))
    }

    #[test]
    fn parse_role_is_case_insensitive() {
        assert_eq!(parse_role("User"), Some(ChatRole::User));
        assert_eq!(parse_role("AI"), Some(ChatRole::Assistant));
        assert_eq!(parse_role("assistant"), Some(ChatRole::Assistant));
        assert_eq!(parse_role("system"), None);
    }

    #[test]
    fn unknown_roles_are_dropped() {
        let messages = into_messages(vec![
            ChatMessageRequest {
                role: "user".to_string(),
                text: "Hello".to_string(),
            },
            ChatMessageRequest {
                role: "bot".to_string(),
                text: "ignored".to_string(),
            },
        ]);

        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].role, ChatRole::User);
    }

    #[tokio::test]
    async fn test_chat_returns_reply() -> TestResult {
        let mut chat = MockChatService::new();

        chat.expect_complete()
            .once()
            .withf(|messages| {
                messages.len() == 2
                    && messages[0].role == ChatRole::User
                    && messages[1].role == ChatRole::Assistant
            })
            .return_once(|_| Ok("Have you tried turning it off and on again?".to_string()));

        let mut res = TestClient::post("http://example.com/chat")
            .json(&json!({
                "messages": [
                    { "role": "user", "text": "My printer is offline" },
                    { "role": "ai", "text": "Is it powered on?" },
                ],
            }))
            .send(&make_service(chat))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));

        let body: ChatReplyEnvelope = res.take_json().await?;

        assert!(body.meta.is_success());
        assert_eq!(body.data.reply, "Have you tried turning it off and on again?");

        Ok(())
    }

    #[tokio::test]
    async fn test_chat_empty_conversation_returns_400() -> TestResult {
        let mut chat = MockChatService::new();

        chat.expect_complete()
            .once()
            .withf(|messages| messages.is_empty())
            .return_once(|_| Err(ChatServiceError::EmptyConversation));

        let res = TestClient::post("http://example.com/chat")
            .json(&json!({ "messages": [] }))
            .send(&make_service(chat))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }

    #[tokio::test]
    async fn test_chat_upstream_failure_returns_500() -> TestResult {
        let mut chat = MockChatService::new();

        chat.expect_complete().once().return_once(|_| {
            Err(ChatServiceError::UnexpectedResponse(
                "response contained no choices".to_string(),
            ))
        });

        let res = TestClient::post("http://example.com/chat")
            .json(&json!({
                "messages": [{ "role": "user", "text": "Hello" }],
            }))
            .send(&make_service(chat))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::INTERNAL_SERVER_ERROR));

        Ok(())
    }
}
