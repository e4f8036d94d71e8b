//! Support Tickets Repository

use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query_as};
use uuid::Uuid;

use crate::domain::tickets::{data::TicketUpdate, records::TicketRecord};

const CREATE_TICKET_SQL: &str = include_str!("sql/create_ticket.sql");
const GET_TICKET_SQL: &str = include_str!("sql/get_ticket.sql");
const LIST_TICKETS_SQL: &str = include_str!("sql/list_tickets.sql");
const UPDATE_TICKET_SQL: &str = include_str!("sql/update_ticket.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgTicketsRepository;

impl PgTicketsRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    /// Insert a ticket. Status and both timestamps come from the database, so
    /// `consent_given_at` can never be client-supplied.
    pub(crate) async fn create_ticket(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        uuid: Uuid,
        customer: Uuid,
        title: &str,
        description: &str,
    ) -> Result<TicketRecord, sqlx::Error> {
        query_as::<Postgres, TicketRecord>(CREATE_TICKET_SQL)
            .bind(uuid)
            .bind(customer)
            .bind(title)
            .bind(description)
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn get_ticket(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        ticket: Uuid,
    ) -> Result<TicketRecord, sqlx::Error> {
        query_as::<Postgres, TicketRecord>(GET_TICKET_SQL)
            .bind(ticket)
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn list_tickets(
        &self,
        tx: &mut Transaction<'_, Postgres>,
    ) -> Result<Vec<TicketRecord>, sqlx::Error> {
        query_as::<Postgres, TicketRecord>(LIST_TICKETS_SQL)
            .fetch_all(&mut **tx)
            .await
    }

    pub(crate) async fn update_ticket(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        ticket: Uuid,
        update: &TicketUpdate,
    ) -> Result<TicketRecord, sqlx::Error> {
        query_as::<Postgres, TicketRecord>(UPDATE_TICKET_SQL)
            .bind(ticket)
            .bind(&update.status)
            .bind(&update.description)
            .fetch_one(&mut **tx)
            .await
    }
}

impl<'r> FromRow<'r, PgRow> for TicketRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            uuid: row.try_get("uuid")?,
            customer_uuid: row.try_get("customer_uuid")?,
            title: row.try_get("title")?,
            description: row.try_get("description")?,
            status: row.try_get("status")?,
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
            consent_given_at: row
                .try_get::<SqlxTimestamp, _>("consent_given_at")?
                .to_jiff(),
        })
    }
}
