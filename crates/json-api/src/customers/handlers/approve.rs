//! Approve Customer Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};
use uuid::Uuid;

use crate::{
    customers::{errors::into_status_error, get::CustomerEnvelope},
    extensions::*,
    meta::OperationMeta,
    state::State,
};

/// Approve Customer Handler
///
/// Marks a customer account as approved for ticket intake. Approving an
/// already-approved customer succeeds without change.
#[endpoint(
    tags("customers"),
    summary = "Approve Customer",
    responses(
        (status_code = StatusCode::OK, description = "Customer approved"),
        (status_code = StatusCode::NOT_FOUND, description = "Customer not found"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    customer: PathParam<Uuid>,
    depot: &mut Depot,
) -> Result<Json<CustomerEnvelope>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let customer = customer.into_inner();

    let approved = state
        .app
        .customers
        .approve_customer(customer)
        .await
        .map_err(into_status_error)?;

    tracing::info!(customer_uuid = %customer, "approved customer");

    Ok(Json(CustomerEnvelope {
        meta: OperationMeta::succeeded(1),
        data: approved.into(),
    }))
}
