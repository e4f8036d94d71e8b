//! Get Customer Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::PathParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use helpdesk_app::domain::customers::records::CustomerRecord;

use crate::{customers::errors::into_status_error, extensions::*, meta::OperationMeta, state::State};

/// Customer Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CustomerResponse {
    /// The unique identifier of the customer
    pub uuid: Uuid,

    /// The customer's display name
    pub name: String,

    /// The customer's contact email
    pub email: String,

    /// The customer's billing street address
    pub address: String,

    /// The customer's billing postal code
    pub postal_code: String,

    /// The customer's billing city
    pub city: String,

    /// The customer's company registration number
    pub cvr: Option<String>,

    /// Whether the account has been approved for ticket intake
    pub is_approved: bool,

    /// The date and time the customer was created
    pub created_at: String,

    /// The date and time the customer was last updated
    pub updated_at: String,
}

impl From<CustomerRecord> for CustomerResponse {
    fn from(customer: CustomerRecord) -> Self {
        Self {
            uuid: customer.uuid,
            name: customer.name,
            email: customer.email,
            address: customer.address,
            postal_code: customer.postal_code,
            city: customer.city,
            cvr: customer.cvr,
            is_approved: customer.is_approved,
            created_at: customer.created_at.to_string(),
            updated_at: customer.updated_at.to_string(),
        }
    }
}

/// Customer Envelope
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CustomerEnvelope {
    /// Operation outcome summary
    pub meta: OperationMeta,

    /// The customer
    pub data: CustomerResponse,
}

/// Get Customer Handler
///
/// Returns a single customer.
#[endpoint(
    tags("customers"),
    summary = "Get Customer",
    responses(
        (status_code = StatusCode::OK, description = "Customer found"),
        (status_code = StatusCode::NOT_FOUND, description = "Customer not found"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    customer: PathParam<Uuid>,
    depot: &mut Depot,
) -> Result<Json<CustomerEnvelope>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let customer = state
        .app
        .customers
        .get_customer(customer.into_inner())
        .await
        .map_err(into_status_error)?;

    Ok(Json(CustomerEnvelope {
        meta: OperationMeta::succeeded(1),
        data: customer.into(),
    }))
}
