use std::sync::Arc;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
/// The engine holds no mutable state of its own; the pool is its only handle
/// to the store.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: gatepass_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}
