use dd_config::{Config, SessionConfig};
use dd_core::StreakOrder;

use std::time::Duration;

use sqlx::SqlitePool;

/// Shared state handed to every handler
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub session: SessionConfig,
    pub streak_order: StreakOrder,
    pub request_timeout: Duration,
}

impl AppState {
    pub fn new(pool: SqlitePool, config: &Config) -> Self {
        Self {
            pool,
            session: config.session.clone(),
            streak_order: config.metrics.streak_order,
            request_timeout: Duration::from_secs(config.server.request_timeout_secs),
        }
    }
}
