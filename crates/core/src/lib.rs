//! Shared domain types and errors for the PMIS backend.

pub mod error;
pub mod types;
