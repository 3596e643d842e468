use std::sync::Arc;

use sqlx::PgPool;

use crate::config::AppConfig;
use crate::services::QueueService;
use crate::store::UserDirectory;

/// Application state shared across all handlers and services
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool
    pub db: PgPool,
    /// The waitlist orchestrator; holds the selected category and its cache
    pub queue: Arc<QueueService>,
    /// Member directory port, shared with the queue service
    pub directory: Arc<dyn UserDirectory>,
    /// Application configuration
    pub config: Arc<AppConfig>,
}

impl AppState {
    pub fn new(
        db: PgPool,
        queue: Arc<QueueService>,
        directory: Arc<dyn UserDirectory>,
        config: AppConfig,
    ) -> Self {
        Self {
            db,
            queue,
            directory,
            config: Arc::new(config),
        }
    }
}
