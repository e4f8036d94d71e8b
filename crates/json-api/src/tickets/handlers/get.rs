//! Get Ticket Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::PathParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use helpdesk_app::domain::tickets::records::TicketRecord;

use crate::{extensions::*, meta::OperationMeta, state::State, tickets::errors::into_status_error};

/// Ticket Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct TicketResponse {
    /// The unique identifier of the ticket
    pub uuid: Uuid,

    /// The customer the ticket is billed to
    pub customer_uuid: Uuid,

    /// Short summary of the issue
    pub title: String,

    /// Full issue description
    pub description: String,

    /// Workflow status
    pub status: String,

    /// The date and time the ticket was created
    pub created_at: String,

    /// The date and time the customer accepted the billing terms
    pub consent_given_at: String,
}

impl From<TicketRecord> for TicketResponse {
    fn from(ticket: TicketRecord) -> Self {
        Self {
            uuid: ticket.uuid,
            customer_uuid: ticket.customer_uuid,
            title: ticket.title,
            description: ticket.description,
            status: ticket.status,
            created_at: ticket.created_at.to_string(),
            consent_given_at: ticket.consent_given_at.to_string(),
        }
    }
}

/// Ticket Envelope
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct TicketEnvelope {
    /// Operation outcome summary
    pub meta: OperationMeta,

    /// The ticket
    pub data: TicketResponse,
}

/// Get Ticket Handler
///
/// Returns a single support ticket.
#[endpoint(
    tags("tickets"),
    summary = "Get Ticket",
    responses(
        (status_code = StatusCode::OK, description = "Ticket found"),
        (status_code = StatusCode::NOT_FOUND, description = "Ticket not found"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    ticket: PathParam<Uuid>,
    depot: &mut Depot,
) -> Result<Json<TicketEnvelope>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let ticket = state
        .app
        .tickets
        .get_ticket(ticket.into_inner())
        .await
        .map_err(into_status_error)?;

    Ok(Json(TicketEnvelope {
        meta: OperationMeta::succeeded(1),
        data: ticket.into(),
    }))
}
