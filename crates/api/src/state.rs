use std::sync::Arc;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already
/// `Clone`). The pool is the single injected store handle: repositories
/// receive it explicitly on every call.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: filmoteka_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}
