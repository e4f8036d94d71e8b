//! Helpdesk Domain Concerns

pub mod customers;
pub mod tickets;
