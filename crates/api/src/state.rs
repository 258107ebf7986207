use std::sync::Arc;

use crate::config::ServerConfig;
use crate::services::PersonService;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: persons_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Person use cases (enrichment + persistence).
    pub persons: Arc<PersonService>,
}
