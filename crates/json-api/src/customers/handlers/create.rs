//! Create Customer Handler

use std::sync::Arc;

use salvo::{
    http::header::LOCATION,
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use helpdesk_app::domain::customers::data::NewCustomer;

use crate::{customers::errors::into_status_error, extensions::*, meta::OperationMeta, state::State};

/// Create Customer Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CreateCustomerRequest {
    /// Customer UUID; assigned by the server when omitted
    pub uuid: Option<Uuid>,

    /// Display name
    pub name: String,

    /// Contact email, unique across customers
    pub email: String,

    /// Billing street address
    pub address: String,

    /// Billing postal code
    pub postal_code: String,

    /// Billing city
    pub city: String,

    /// Company registration number
    pub cvr: Option<String>,
}

impl From<CreateCustomerRequest> for NewCustomer {
    fn from(request: CreateCustomerRequest) -> Self {
        NewCustomer {
            uuid: request.uuid.unwrap_or_else(Uuid::now_v7),
            name: request.name,
            email: request.email,
            address: request.address,
            postal_code: request.postal_code,
            city: request.city,
            cvr: request.cvr,
        }
    }
}

/// Customer Created Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CustomerCreatedResponse {
    /// Created customer UUID
    pub uuid: Uuid,
}

/// Customer Created Envelope
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CustomerCreatedEnvelope {
    /// Operation outcome summary
    pub meta: OperationMeta,

    /// The created customer
    pub data: CustomerCreatedResponse,
}

/// Create Customer Handler
///
/// Registers a new, unapproved customer.
#[endpoint(
    tags("customers"),
    summary = "Create Customer",
    responses(
        (status_code = StatusCode::CREATED, description = "Customer created"),
        (status_code = StatusCode::CONFLICT, description = "A customer with this email already exists"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<CreateCustomerRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<CustomerCreatedEnvelope>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let uuid = state
        .app
        .customers
        .create_customer(json.into_inner().into())
        .await
        .map_err(into_status_error)?
        .uuid;

    res.add_header(LOCATION, format!("/api/v1/customers/{uuid}"), true)
        .or_500("failed to set location header")?
        .status_code(StatusCode::CREATED);

    Ok(Json(CustomerCreatedEnvelope {
        meta: OperationMeta::succeeded(1),
        data: CustomerCreatedResponse { uuid },
    }))
}
