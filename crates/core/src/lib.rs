//! Shared domain types and errors for the filmoteka backend.

pub mod error;
pub mod types;
