//! List Customers Handler

use std::sync::Arc;

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};

use crate::{
    customers::{errors::into_status_error, get::CustomerResponse},
    extensions::*,
    meta::OperationMeta,
    state::State,
};

/// Customer List Envelope
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CustomerListEnvelope {
    /// Operation outcome summary
    pub meta: OperationMeta,

    /// All customers
    pub data: Vec<CustomerResponse>,
}

/// List Customers Handler
///
/// Returns all customers.
#[endpoint(
    tags("customers"),
    summary = "List Customers",
    responses(
        (status_code = StatusCode::OK, description = "Customers listed"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<CustomerListEnvelope>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let customers = state
        .app
        .customers
        .list_customers()
        .await
        .map_err(into_status_error)?;

    let data: Vec<CustomerResponse> = customers.into_iter().map(CustomerResponse::from).collect();

    Ok(Json(CustomerListEnvelope {
        meta: OperationMeta::succeeded(data.len()),
        data,
    }))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;
    use uuid::Uuid;

    use helpdesk_app::domain::customers::{CustomersServiceError, MockCustomersService};

    use crate::test_helpers::{customers_service, make_customer};

    use super::*;

    fn make_service(customers: MockCustomersService) -> Service {
        customers_service(customers, Router::with_path("customers").get(handler))
    }

    #[tokio::test]
    async fn test_index_returns_all_customers() -> TestResult {
        let mut customers = MockCustomersService::new();

        let first = make_customer(Uuid::now_v7());
        let second = make_customer(Uuid::now_v7());

        customers
            .expect_list_customers()
            .once()
            .return_once(move || Ok(vec![first, second]));

        let mut res = TestClient::get("http://example.com/customers")
            .send(&make_service(customers))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));

        let body: CustomerListEnvelope = res.take_json().await?;

        assert_eq!(body.meta.success_count, 2);
        assert_eq!(body.data.len(), 2);

        Ok(())
    }

    #[tokio::test]
    async fn test_index_empty_list_is_ok() -> TestResult {
        let mut customers = MockCustomersService::new();

        customers
            .expect_list_customers()
            .once()
            .return_once(|| Ok(vec![]));

        let mut res = TestClient::get("http://example.com/customers")
            .send(&make_service(customers))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));

        let body: CustomerListEnvelope = res.take_json().await?;

        assert_eq!(body.meta.success_count, 0);
        assert!(body.data.is_empty());
        assert!(body.meta.is_success());

        Ok(())
    }

    #[tokio::test]
    async fn test_index_storage_error_returns_500() -> TestResult {
        let mut customers = MockCustomersService::new();

        customers
            .expect_list_customers()
            .once()
            .return_once(|| Err(CustomersServiceError::Sql(sqlx::Error::PoolTimedOut)));

        let res = TestClient::get("http://example.com/customers")
            .send(&make_service(customers))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::INTERNAL_SERVER_ERROR));

        Ok(())
    }
}
