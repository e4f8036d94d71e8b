//! Update Customer Handler

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

use helpdesk_app::domain::customers::data::CustomerUpdate;

use crate::{
    customers::{errors::into_status_error, get::CustomerEnvelope},
    extensions::*,
    meta::OperationMeta,
    state::State,
};

/// Update Customer Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct UpdateCustomerRequest {
    /// Customer UUID; must match the URL when present
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

impl From<UpdateCustomerRequest> for CustomerUpdate {
    fn from(request: UpdateCustomerRequest) -> Self {
        CustomerUpdate {
            name: request.name,
            email: request.email,
            address: request.address,
            postal_code: request.postal_code,
            city: request.city,
            cvr: request.cvr,
        }
    }
}

/// Update Customer Handler
///
/// Replaces a customer's contact and billing details. Approval state and
/// timestamps are never writable through this endpoint.
#[endpoint(
    tags("customers"),
    summary = "Update Customer",
    responses(
        (status_code = StatusCode::OK, description = "Customer updated"),
        (status_code = StatusCode::NOT_FOUND, description = "Customer not found"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    customer: PathParam<Uuid>,
    json: JsonBody<UpdateCustomerRequest>,
    depot: &mut Depot,
) -> Result<Json<CustomerEnvelope>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let customer = customer.into_inner();
    let request = json.into_inner();

    if request.uuid.is_some_and(|uuid| uuid != customer) {
        return Err(StatusError::bad_request().brief("Body uuid does not match the URL"));
    }

    let updated = state
        .app
        .customers
        .update_customer(customer, request.into())
        .await
        .map_err(into_status_error)?;

    Ok(Json(CustomerEnvelope {
        meta: OperationMeta::succeeded(1),
        data: updated.into(),
    }))
}
