//! Customers Data

use uuid::Uuid;

/// New Customer Data
///
/// Approval is never part of the input; every customer starts unapproved.
#[derive(Debug, Clone, PartialEq)]
pub struct NewCustomer {
    pub uuid: Uuid,
    pub name: String,
    pub email: String,
    pub address: String,
    pub postal_code: String,
    pub city: String,
    pub cvr: Option<String>,
}

/// Customer Update Data
#[derive(Debug, Clone, PartialEq)]
pub struct CustomerUpdate {
    pub name: String,
    pub email: String,
    pub address: String,
    pub postal_code: String,
    pub city: String,
    pub cvr: Option<String>,
}
