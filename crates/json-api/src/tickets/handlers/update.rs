//! Update Ticket Handler

use std::sync::Arc;

use salvo::{
    oapi::{
        ToSchema,
        extract::{JsonBody, PathParam},
    },
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use helpdesk_app::domain::tickets::data::TicketUpdate;

use crate::{
    extensions::*,
    meta::OperationMeta,
    state::State,
    tickets::{errors::into_status_error, get::TicketEnvelope},
};

/// Update Ticket Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct UpdateTicketRequest {
    /// New workflow status
    pub status: String,

    /// Updated issue description
    pub description: String,
}

impl From<UpdateTicketRequest> for TicketUpdate {
    fn from(request: UpdateTicketRequest) -> Self {
        TicketUpdate {
            status: request.status,
            description: request.description,
        }
    }
}

/// Update Ticket Handler
///
/// Changes a ticket's status and description. Customer, title, and the
/// consent timestamp are frozen after creation.
#[endpoint(
    tags("tickets"),
    summary = "Update Ticket",
    responses(
        (status_code = StatusCode::OK, description = "Ticket updated"),
        (status_code = StatusCode::NOT_FOUND, description = "Ticket not found"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    ticket: PathParam<Uuid>,
    json: JsonBody<UpdateTicketRequest>,
    depot: &mut Depot,
) -> Result<Json<TicketEnvelope>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let updated = state
        .app
        .tickets
        .update_ticket(ticket.into_inner(), json.into_inner().into())
        .await
        .map_err(into_status_error)?;

    Ok(Json(TicketEnvelope {
        meta: OperationMeta::succeeded(1),
        data: updated.into(),
    }))
}
