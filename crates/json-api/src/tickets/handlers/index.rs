//! List Tickets Handler

use std::sync::Arc;

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};

use crate::{
    extensions::*,
    meta::OperationMeta,
    state::State,
    tickets::{errors::into_status_error, get::TicketResponse},
};

/// Ticket List Envelope
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct TicketListEnvelope {
    /// Operation outcome summary
    pub meta: OperationMeta,

    /// All tickets
    pub data: Vec<TicketResponse>,
}

/// List Tickets Handler
///
/// Returns all support tickets.
#[endpoint(
    tags("tickets"),
    summary = "List Tickets",
    responses(
        (status_code = StatusCode::OK, description = "Tickets listed"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<TicketListEnvelope>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let tickets = state
        .app
        .tickets
        .list_tickets()
        .await
        .map_err(into_status_error)?;

    let data: Vec<TicketResponse> = tickets.into_iter().map(TicketResponse::from).collect();

    Ok(Json(TicketListEnvelope {
        meta: OperationMeta::succeeded(data.len()),
        data,
    }))
}
