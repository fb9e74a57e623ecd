use std::sync::Arc;

use contacts_db::store::ContactStore;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Contact persistence. Postgres in production, in-memory in tests.
    pub store: Arc<dyn ContactStore>,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}
