//! Shared domain types, errors and pure policies for the persons service.
//!
//! Nothing in this crate performs I/O; the enrichment client, repository
//! layer and HTTP handlers all depend on it.

pub mod demographics;
pub mod error;
pub mod pagination;
pub mod types;
