use std::sync::Arc;

use crate::config::AppConfig;
use crate::metrics::Metrics;

/// The shared application state.
///
/// Cloneable for Axum's request extraction system; everything in here is
/// either a pool or behind an `Arc`. The lifecycle of the database pool is
/// owned by the process entry point and handed down at construction time,
/// never through a global handle.
#[derive(Clone)]
pub struct AppState {
    /// The database connection pool.
    pub db: sqlx::SqlitePool,
    /// The application configuration.
    pub config: Arc<AppConfig>,
    /// Operational counters exposed at `/metrics`.
    pub metrics: Metrics,
}

impl AppState {
    pub fn new(db: sqlx::SqlitePool, config: AppConfig) -> Self {
        Self { db, config: Arc::new(config), metrics: Metrics::new() }
    }
}
