//! Chat Handlers

pub(crate) mod create;
