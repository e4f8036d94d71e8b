//! Support Tickets Data

use uuid::Uuid;

/// New Ticket Data
///
/// `consent_given` is the caller's assertion; the consent timestamp itself is
/// never part of the input.
#[derive(Debug, Clone, PartialEq)]
pub struct NewTicket {
    pub uuid: Uuid,
    pub customer_uuid: Uuid,
    pub title: String,
    pub description: String,
    pub consent_given: bool,
}

/// Ticket Update Data
///
/// Only status and description are mutable after creation.
#[derive(Debug, Clone, PartialEq)]
pub struct TicketUpdate {
    pub status: String,
    pub description: String,
}
