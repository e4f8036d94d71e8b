//! Tickets service errors.

use sqlx::{
    Error,
    error::{DatabaseError, ErrorKind},
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TicketsServiceError {
    #[error("billing terms must be accepted before a ticket can be created")]
    ConsentRequired,

    #[error("{0} is required")]
    MissingField(&'static str),

    #[error("customer account not found")]
    CustomerNotFound,

    #[error("customer account is awaiting approval")]
    PendingApproval,

    #[error("ticket not found")]
    NotFound,

    #[error("ticket already exists")]
    AlreadyExists,

    #[error("storage error")]
    Sql(#[source] Error),
}

impl From<Error> for TicketsServiceError {
    fn from(error: Error) -> Self {
        if matches!(error, Error::RowNotFound) {
            return Self::NotFound;
        }

        match error.as_database_error().map(DatabaseError::kind) {
            Some(ErrorKind::UniqueViolation) => Self::AlreadyExists,
            // The customer FK; the insert raced a concurrent customer delete.
            Some(ErrorKind::ForeignKeyViolation) => Self::CustomerNotFound,
            Some(ErrorKind::Other | _) | None => Self::Sql(error),
        }
    }
}
