//! Tickets service.
//!
//! Ticket intake is gated: the referenced customer must exist, be approved,
//! and the caller must have accepted the billing terms.

use async_trait::async_trait;
use mockall::automock;
use tracing::{info, warn};
use uuid::Uuid;

use crate::{
    database::Db,
    domain::{
        customers::repository::PgCustomersRepository,
        tickets::{
            data::{NewTicket, TicketUpdate},
            errors::TicketsServiceError,
            records::TicketRecord,
            repository::PgTicketsRepository,
        },
    },
};

#[derive(Debug, Clone)]
pub struct PgTicketsService {
    db: Db,
    tickets_repository: PgTicketsRepository,
    customers_repository: PgCustomersRepository,
}

impl PgTicketsService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            tickets_repository: PgTicketsRepository::new(),
            customers_repository: PgCustomersRepository::new(),
        }
    }
}

fn require(value: &str, field: &'static str) -> Result<(), TicketsServiceError> {
    if value.trim().is_empty() {
        return Err(TicketsServiceError::MissingField(field));
    }

    Ok(())
}

#[async_trait]
impl TicketsService for PgTicketsService {
    async fn create_ticket(&self, ticket: NewTicket) -> Result<TicketRecord, TicketsServiceError> {
        // Consent is checked before anything else, including the customer
        // lookup, so a missing customer never masks a missing consent.
        if !ticket.consent_given {
            warn!(
                customer_uuid = %ticket.customer_uuid,
                "ticket rejected: billing terms not accepted"
            );

            return Err(TicketsServiceError::ConsentRequired);
        }

        require(&ticket.title, "title")?;
        require(&ticket.description, "description")?;

        let mut tx = self.db.begin().await?;

        let customer = match self
            .customers_repository
            .get_customer(&mut tx, ticket.customer_uuid)
            .await
        {
            Ok(customer) => customer,
            Err(sqlx::Error::RowNotFound) => {
                warn!(customer_uuid = %ticket.customer_uuid, "ticket rejected: unknown customer");

                return Err(TicketsServiceError::CustomerNotFound);
            }
            Err(error) => return Err(error.into()),
        };

        if !customer.is_approved {
            warn!(
                customer_uuid = %ticket.customer_uuid,
                "ticket rejected: customer awaiting approval"
            );

            return Err(TicketsServiceError::PendingApproval);
        }

        let created = self
            .tickets_repository
            .create_ticket(
                &mut tx,
                ticket.uuid,
                ticket.customer_uuid,
                &ticket.title,
                &ticket.description,
            )
            .await?;

        tx.commit().await?;

        info!(ticket_uuid = %created.uuid, customer_uuid = %created.customer_uuid, "ticket created");

        Ok(created)
    }

    async fn get_ticket(&self, ticket: Uuid) -> Result<TicketRecord, TicketsServiceError> {
        let mut tx = self.db.begin().await?;

        let ticket = self.tickets_repository.get_ticket(&mut tx, ticket).await?;

        tx.commit().await?;

        Ok(ticket)
    }

    async fn list_tickets(&self) -> Result<Vec<TicketRecord>, TicketsServiceError> {
        let mut tx = self.db.begin().await?;

        let tickets = self.tickets_repository.list_tickets(&mut tx).await?;

        tx.commit().await?;

        Ok(tickets)
    }

    async fn update_ticket(
        &self,
        ticket: Uuid,
        update: TicketUpdate,
    ) -> Result<TicketRecord, TicketsServiceError> {
        require(&update.status, "status")?;
        require(&update.description, "description")?;

        let mut tx = self.db.begin().await?;

        let updated = self
            .tickets_repository
            .update_ticket(&mut tx, ticket, &update)
            .await?;

        tx.commit().await?;

        Ok(updated)
    }
}

#[automock]
#[async_trait]
pub trait TicketsService: Send + Sync {
    /// Creates a ticket for an approved, consenting customer.
    async fn create_ticket(&self, ticket: NewTicket) -> Result<TicketRecord, TicketsServiceError>;

    /// Retrieve a single ticket.
    async fn get_ticket(&self, ticket: Uuid) -> Result<TicketRecord, TicketsServiceError>;

    /// Retrieves all tickets.
    async fn list_tickets(&self) -> Result<Vec<TicketRecord>, TicketsServiceError>;

    /// Updates a ticket's status and description; all other fields are frozen.
    async fn update_ticket(
        &self,
        ticket: Uuid,
        update: TicketUpdate,
    ) -> Result<TicketRecord, TicketsServiceError>;
}
