//! Customer Records

use jiff::Timestamp;
use uuid::Uuid;

/// Customer Record
#[derive(Debug, Clone)]
pub struct CustomerRecord {
    /// Unique customer identifier.
    pub uuid: Uuid,

    /// Customer display name.
    pub name: String,

    /// Contact email, unique across customers.
    pub email: String,

    /// Billing street address.
    pub address: String,

    /// Billing postal code.
    pub postal_code: String,

    /// Billing city.
    pub city: String,

    /// Company registration number, optional.
    pub cvr: Option<String>,

    /// Whether an admin has approved the account for ticket intake.
    pub is_approved: bool,

    /// Customer creation timestamp, server-assigned.
    pub created_at: Timestamp,

    /// Last update timestamp.
    pub updated_at: Timestamp,
}
