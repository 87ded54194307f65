//! Shared domain types and the error taxonomy for the gate pass service.

pub mod error;
pub mod types;
