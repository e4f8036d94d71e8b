//! Create Ticket Handler
//!
//! Intake is gated: the customer must exist, be approved, and the caller must
//! have accepted the billing terms. The consent timestamp is assigned by the
//! server; clients only assert that consent was given.

use std::sync::Arc;

use salvo::{
    http::header::LOCATION,
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use helpdesk_app::domain::tickets::data::NewTicket;

use crate::{extensions::*, meta::OperationMeta, state::State, tickets::errors::into_status_error};

/// Create Ticket Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CreateTicketRequest {
    /// Ticket UUID; assigned by the server when omitted
    pub uuid: Option<Uuid>,

    /// The customer the ticket is billed to
    pub customer_uuid: Uuid,

    /// Short summary of the issue
    pub title: String,

    /// Full issue description
    pub description: String,

    /// Whether the caller accepted the billing terms
    pub has_consented: bool,
}

impl From<CreateTicketRequest> for NewTicket {
    fn from(request: CreateTicketRequest) -> Self {
        NewTicket {
            uuid: request.uuid.unwrap_or_else(Uuid::now_v7),
            customer_uuid: request.customer_uuid,
            title: request.title,
            description: request.description,
            consent_given: request.has_consented,
        }
    }
}

/// Ticket Created Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct TicketCreatedResponse {
    /// Created ticket UUID
    pub uuid: Uuid,
}

/// Ticket Created Envelope
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct TicketCreatedEnvelope {
    /// Operation outcome summary
    pub meta: OperationMeta,

    /// The created ticket
    pub data: TicketCreatedResponse,
}

/// Create Ticket Handler
#[endpoint(
    tags("tickets"),
    summary = "Create Ticket",
    responses(
        (status_code = StatusCode::CREATED, description = "Ticket created"),
        (status_code = StatusCode::FORBIDDEN, description = "Customer account is awaiting approval"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<CreateTicketRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<TicketCreatedEnvelope>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let uuid = state
        .app
        .tickets
        .create_ticket(json.into_inner().into())
        .await
        .map_err(into_status_error)?
        .uuid;

    res.add_header(LOCATION, format!("/api/v1/tickets/{uuid}"), true)
        .or_500("failed to set location header")?
        .status_code(StatusCode::CREATED);

    Ok(Json(TicketCreatedEnvelope {
        meta: OperationMeta::succeeded(1),
        data: TicketCreatedResponse { uuid },
    }))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::json;
    use testresult::TestResult;

    use helpdesk_app::domain::tickets::{MockTicketsService, TicketsServiceError};

    use crate::test_helpers::{make_ticket, tickets_service};

    use super::*;

    fn make_service(tickets: MockTicketsService) -> Service {
        tickets_service(tickets, Router::with_path("tickets").post(handler))
    }

    fn request_body(uuid: Uuid, customer: Uuid, has_consented: bool) -> serde_json::Value {
        json!({
            "uuid": uuid,
            "customer_uuid": customer,
            "title": "Printer offline",
            "description": "The office printer does not respond to jobs.",
            "has_consented": has_consented,
        })
    }

    #[tokio::test]
    async fn test_create_ticket_success() -> TestResult {
        let uuid = Uuid::now_v7();
        let customer = Uuid::now_v7();
        let ticket = make_ticket(uuid, customer);

        let mut tickets = MockTicketsService::new();

        tickets
            .expect_create_ticket()
            .once()
            .withf(move |new| {
                new.uuid == uuid && new.customer_uuid == customer && new.consent_given
            })
            .return_once(move |_| Ok(ticket));

        let mut res = TestClient::post("http://example.com/tickets")
            .json(&request_body(uuid, customer, true))
            .send(&make_service(tickets))
            .await;

        let location = res.headers().get("location").and_then(|v| v.to_str().ok());

        assert_eq!(res.status_code, Some(StatusCode::CREATED));
        assert_eq!(location, Some(format!("/api/v1/tickets/{uuid}").as_str()));

        let body: TicketCreatedEnvelope = res.take_json().await?;

        assert!(body.meta.is_success());
        assert_eq!(body.data.uuid, uuid);

        Ok(())
    }

    #[tokio::test]
    async fn test_create_ticket_without_consent_returns_400() -> TestResult {
        let uuid = Uuid::now_v7();
        let customer = Uuid::now_v7();

        let mut tickets = MockTicketsService::new();

        tickets
            .expect_create_ticket()
            .once()
            .withf(|new| !new.consent_given)
            .return_once(|_| Err(TicketsServiceError::ConsentRequired));

        let res = TestClient::post("http://example.com/tickets")
            .json(&request_body(uuid, customer, false))
            .send(&make_service(tickets))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }

    #[tokio::test]
    async fn test_create_ticket_pending_approval_returns_403() -> TestResult {
        let uuid = Uuid::now_v7();
        let customer = Uuid::now_v7();

        let mut tickets = MockTicketsService::new();

        tickets
            .expect_create_ticket()
            .once()
            .return_once(|_| Err(TicketsServiceError::PendingApproval));

        let res = TestClient::post("http://example.com/tickets")
            .json(&request_body(uuid, customer, true))
            .send(&make_service(tickets))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::FORBIDDEN));

        Ok(())
    }

    #[tokio::test]
    async fn test_create_ticket_unknown_customer_returns_400() -> TestResult {
        let uuid = Uuid::now_v7();
        let customer = Uuid::now_v7();

        let mut tickets = MockTicketsService::new();

        tickets
            .expect_create_ticket()
            .once()
            .return_once(|_| Err(TicketsServiceError::CustomerNotFound));

        let res = TestClient::post("http://example.com/tickets")
            .json(&request_body(uuid, customer, true))
            .send(&make_service(tickets))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }

    #[tokio::test]
    async fn test_create_ticket_without_uuid_gets_server_assigned_one() -> TestResult {
        let customer = Uuid::now_v7();

        let mut tickets = MockTicketsService::new();

        tickets
            .expect_create_ticket()
            .once()
            .withf(|new| !new.uuid.is_nil())
            .returning(move |new| Ok(make_ticket(new.uuid, new.customer_uuid)));

        let mut res = TestClient::post("http://example.com/tickets")
            .json(&json!({
                "customer_uuid": customer,
                "title": "Printer offline",
                "description": "The office printer does not respond to jobs.",
                "has_consented": true,
            }))
            .send(&make_service(tickets))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::CREATED));

        let body: TicketCreatedEnvelope = res.take_json().await?;

        assert!(!body.data.uuid.is_nil());

        Ok(())
    }

    #[tokio::test]
    async fn test_create_ticket_malformed_body_returns_400() -> TestResult {
        let mut tickets = MockTicketsService::new();

        tickets.expect_create_ticket().never();

        let res = TestClient::post("http://example.com/tickets")
            .json(&json!({ "title": "Printer offline" }))
            .send(&make_service(tickets))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }
}
