//! Application state shared across all handlers.

use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::config::AppConfig;

/// State passed to every handler via `State<AppState>`.
///
/// `DatabaseConnection` is an internally reference-counted pool, so cloning
/// the state per request is cheap.
#[derive(Debug, Clone)]
pub struct AppState {
    /// SQLite connection pool
    pub db: DatabaseConnection,
    /// Application configuration
    pub config: Arc<AppConfig>,
}

impl AppState {
    pub fn new(db: DatabaseConnection, config: AppConfig) -> Self {
        Self {
            db,
            config: Arc::new(config),
        }
    }
}
