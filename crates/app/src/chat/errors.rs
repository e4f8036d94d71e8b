//! Chat service errors.

use thiserror::Error;

/// Errors that can occur when relaying a conversation upstream.
#[derive(Debug, Error)]
pub enum ChatServiceError {
    /// The caller sent no messages at all.
    #[error("conversation cannot be empty")]
    EmptyConversation,

    /// An HTTP transport or serialization error occurred.
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// The upstream service returned a non-2xx response or unexpected body.
    #[error("unexpected response from chat completion service: {0}")]
    UnexpectedResponse(String),
}
