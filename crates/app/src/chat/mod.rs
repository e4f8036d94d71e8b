//! AI chat passthrough.
//!
//! The upstream chat completion API is an external collaborator; everything
//! here is a thin client behind the [`ChatService`] trait.

pub mod client;
pub mod data;
pub mod errors;
pub mod service;

pub use client::{ChatCompletionsConfig, HttpChatClient};
pub use errors::ChatServiceError;
pub use service::*;
