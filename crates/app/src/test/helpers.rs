//! Test Helpers

use uuid::Uuid;

use crate::{
    domain::{
        customers::{
            CustomersService, data::NewCustomer, errors::CustomersServiceError,
        },
        tickets::data::NewTicket,
    },
    test::TestContext,
};

pub(crate) fn new_customer(uuid: Uuid, email: &str) -> NewCustomer {
    NewCustomer {
        uuid,
        name: "Alice Andersen".to_string(),
        email: email.to_string(),
        address: "Main Street 1".to_string(),
        postal_code: "7200".to_string(),
        city: "Grindsted".to_string(),
        cvr: None,
    }
}

pub(crate) fn new_ticket(uuid: Uuid, customer: Uuid, consent_given: bool) -> NewTicket {
    NewTicket {
        uuid,
        customer_uuid: customer,
        title: "Printer offline".to_string(),
        description: "The office printer refuses every job".to_string(),
        consent_given,
    }
}

/// Create and immediately approve a customer, returning its uuid.
pub(crate) async fn approved_customer(
    ctx: &TestContext,
    email: &str,
) -> Result<Uuid, CustomersServiceError> {
    let uuid = Uuid::now_v7();

    ctx.customers.create_customer(new_customer(uuid, email)).await?;
    ctx.customers.approve_customer(uuid).await?;

    Ok(uuid)
}
