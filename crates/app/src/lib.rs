//! Shared application domain and persistence modules.

pub mod chat;
pub mod context;
pub mod database;
pub mod domain;

#[cfg(test)]
mod test;
