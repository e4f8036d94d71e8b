//! Support Ticket Records

use jiff::Timestamp;
use uuid::Uuid;

/// Status a new ticket is created with.
pub const NEW_TICKET_STATUS: &str = "Ny";

/// Support Ticket Record
#[derive(Debug, Clone)]
pub struct TicketRecord {
    /// Unique ticket identifier.
    pub uuid: Uuid,

    /// Customer the ticket is billed to.
    pub customer_uuid: Uuid,

    /// Short summary of the issue.
    pub title: String,

    /// Full issue description.
    pub description: String,

    /// Workflow status, e.g. "Ny", "I gang", "Afsluttet".
    pub status: String,

    /// Ticket creation timestamp, server-assigned.
    pub created_at: Timestamp,

    /// When the customer accepted the billing terms. Server-assigned at
    /// creation so clients cannot backdate consent.
    pub consent_given_at: Timestamp,
}
