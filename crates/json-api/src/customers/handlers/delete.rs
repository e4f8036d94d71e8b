//! Delete Customer Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::PathParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
    customers::{errors::into_status_error, get::CustomerResponse},
    extensions::*,
    meta::OperationMeta,
    state::State,
};

/// Customer Deleted Envelope
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CustomerDeletedEnvelope {
    /// Operation outcome summary
    pub meta: OperationMeta,

    /// Always null; the record no longer exists
    pub data: Option<CustomerResponse>,
}

/// Delete Customer Handler
///
/// Deletes a customer. Refused while support tickets still reference it.
#[endpoint(
    tags("customers"),
    summary = "Delete Customer",
    responses(
        (status_code = StatusCode::OK, description = "Customer deleted"),
        (status_code = StatusCode::NOT_FOUND, description = "Customer not found"),
        (status_code = StatusCode::BAD_REQUEST, description = "Customer still has support tickets"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    customer: PathParam<Uuid>,
    depot: &mut Depot,
) -> Result<Json<CustomerDeletedEnvelope>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let customer = customer.into_inner();

    state
        .app
        .customers
        .delete_customer(customer)
        .await
        .map_err(into_status_error)?;

    tracing::info!(customer_uuid = %customer, "deleted customer");

    Ok(Json(CustomerDeletedEnvelope {
        meta: OperationMeta::succeeded(1),
        data: None,
    }))
}
