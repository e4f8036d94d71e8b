//! Errors

use salvo::http::StatusError;
use tracing::error;

use helpdesk_app::domain::customers::CustomersServiceError;

pub(crate) fn into_status_error(error: CustomersServiceError) -> StatusError {
    match error {
        CustomersServiceError::AlreadyExists => {
            StatusError::conflict().brief("A customer with this email already exists")
        }
        CustomersServiceError::MissingField(field) => {
            StatusError::bad_request().brief(format!("{field} is required"))
        }
        CustomersServiceError::InvalidData => {
            StatusError::bad_request().brief("Invalid customer payload")
        }
        CustomersServiceError::HasTickets => {
            StatusError::bad_request().brief("Customer still has support tickets")
        }
        CustomersServiceError::NotFound => StatusError::not_found().brief("Customer not found"),
        CustomersServiceError::Sql(source) => {
            error!("customer storage error: {source}");

            StatusError::internal_server_error()
        }
    }
}
