//! Errors

use salvo::http::StatusError;
use tracing::error;

use helpdesk_app::chat::ChatServiceError;

pub(crate) fn into_status_error(error: ChatServiceError) -> StatusError {
    match error {
        ChatServiceError::EmptyConversation => {
            StatusError::bad_request().brief("Conversation cannot be empty")
        }
        // Upstream detail stays in the log; the client gets a generic 500.
        ChatServiceError::Http(source) => {
            error!("chat completion request failed: {source}");

            StatusError::internal_server_error()
        }
        ChatServiceError::UnexpectedResponse(detail) => {
            error!("chat completion returned unexpected response: {detail}");

            StatusError::internal_server_error()
        }
    }
}
