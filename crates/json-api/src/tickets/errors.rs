//! Errors

use salvo::http::StatusError;
use tracing::error;

use helpdesk_app::domain::tickets::TicketsServiceError;

pub(crate) fn into_status_error(error: TicketsServiceError) -> StatusError {
    match error {
        TicketsServiceError::ConsentRequired => {
            StatusError::bad_request().brief("Billing terms must be accepted")
        }
        TicketsServiceError::MissingField(field) => {
            StatusError::bad_request().brief(format!("{field} is required"))
        }
        TicketsServiceError::CustomerNotFound => {
            StatusError::bad_request().brief("Unknown customer")
        }
        // The account exists but has not been cleared by an admin yet.
        TicketsServiceError::PendingApproval => {
            StatusError::forbidden().brief("Customer account is awaiting approval")
        }
        TicketsServiceError::NotFound => StatusError::not_found().brief("Ticket not found"),
        TicketsServiceError::AlreadyExists => {
            StatusError::conflict().brief("Ticket already exists")
        }
        TicketsServiceError::Sql(source) => {
            error!("ticket storage error: {source}");

            StatusError::internal_server_error()
        }
    }
}
