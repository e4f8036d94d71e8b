//! Customers service.

use async_trait::async_trait;
use mockall::automock;
use uuid::Uuid;

use crate::{
    database::Db,
    domain::customers::{
        data::{CustomerUpdate, NewCustomer},
        errors::CustomersServiceError,
        records::CustomerRecord,
        repository::PgCustomersRepository,
    },
};

#[derive(Debug, Clone)]
pub struct PgCustomersService {
    db: Db,
    repository: PgCustomersRepository,
}

impl PgCustomersService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgCustomersRepository::new(),
        }
    }
}

/// Reject blank required fields before anything touches the database.
fn require(value: &str, field: &'static str) -> Result<(), CustomersServiceError> {
    if value.trim().is_empty() {
        return Err(CustomersServiceError::MissingField(field));
    }

    Ok(())
}

fn validate_fields(
    name: &str,
    email: &str,
    address: &str,
    postal_code: &str,
    city: &str,
) -> Result<(), CustomersServiceError> {
    require(name, "name")?;
    require(email, "email")?;
    require(address, "address")?;
    require(postal_code, "postal_code")?;
    require(city, "city")?;

    Ok(())
}

#[async_trait]
impl CustomersService for PgCustomersService {
    async fn list_customers(&self) -> Result<Vec<CustomerRecord>, CustomersServiceError> {
        let mut tx = self.db.begin().await?;

        let customers = self.repository.list_customers(&mut tx).await?;

        tx.commit().await?;

        Ok(customers)
    }

    async fn get_customer(&self, customer: Uuid) -> Result<CustomerRecord, CustomersServiceError> {
        let mut tx = self.db.begin().await?;

        let customer = self.repository.get_customer(&mut tx, customer).await?;

        tx.commit().await?;

        Ok(customer)
    }

    async fn create_customer(
        &self,
        customer: NewCustomer,
    ) -> Result<CustomerRecord, CustomersServiceError> {
        validate_fields(
            &customer.name,
            &customer.email,
            &customer.address,
            &customer.postal_code,
            &customer.city,
        )?;

        let mut tx = self.db.begin().await?;

        let created = self
            .repository
            .create_customer(
                &mut tx,
                customer.uuid,
                &customer.name,
                &customer.email,
                &customer.address,
                &customer.postal_code,
                &customer.city,
                customer.cvr.as_deref(),
            )
            .await?;

        tx.commit().await?;

        Ok(created)
    }

    async fn update_customer(
        &self,
        customer: Uuid,
        update: CustomerUpdate,
    ) -> Result<CustomerRecord, CustomersServiceError> {
        validate_fields(
            &update.name,
            &update.email,
            &update.address,
            &update.postal_code,
            &update.city,
        )?;

        let mut tx = self.db.begin().await?;

        let updated = self
            .repository
            .update_customer(&mut tx, customer, &update)
            .await?;

        tx.commit().await?;

        Ok(updated)
    }

    async fn approve_customer(
        &self,
        customer: Uuid,
    ) -> Result<CustomerRecord, CustomersServiceError> {
        let mut tx = self.db.begin().await?;

        // Unconditional flip; approving an already-approved customer is a no-op
        // that still succeeds.
        let approved = self.repository.approve_customer(&mut tx, customer).await?;

        tx.commit().await?;

        Ok(approved)
    }

    async fn delete_customer(&self, customer: Uuid) -> Result<(), CustomersServiceError> {
        let mut tx = self.db.begin().await?;

        let rows_affected = self.repository.delete_customer(&mut tx, customer).await?;

        if rows_affected == 0 {
            return Err(CustomersServiceError::NotFound);
        }

        tx.commit().await?;

        Ok(())
    }
}

#[automock]
#[async_trait]
pub trait CustomersService: Send + Sync {
    /// Retrieves all customers.
    async fn list_customers(&self) -> Result<Vec<CustomerRecord>, CustomersServiceError>;

    /// Retrieve a single customer.
    async fn get_customer(&self, customer: Uuid) -> Result<CustomerRecord, CustomersServiceError>;

    /// Creates a new, unapproved customer.
    async fn create_customer(
        &self,
        customer: NewCustomer,
    ) -> Result<CustomerRecord, CustomersServiceError>;

    /// Updates a customer's contact and billing details.
    async fn update_customer(
        &self,
        customer: Uuid,
        update: CustomerUpdate,
    ) -> Result<CustomerRecord, CustomersServiceError>;

    /// Marks a customer as approved for ticket intake. Idempotent.
    async fn approve_customer(
        &self,
        customer: Uuid,
    ) -> Result<CustomerRecord, CustomersServiceError>;

    /// Deletes a customer. Fails while support tickets still reference it.
    async fn delete_customer(&self, customer: Uuid) -> Result<(), CustomersServiceError>;
}
