//! Chat service seam.

use async_trait::async_trait;
use mockall::automock;

use crate::chat::{data::ChatMessage, errors::ChatServiceError};

#[automock]
#[async_trait]
/// Chat completion operations.
pub trait ChatService: Send + Sync {
    /// Relay a conversation to the completion service and return the reply.
    async fn complete(&self, messages: Vec<ChatMessage>) -> Result<String, ChatServiceError>;
}
