mod config;
mod dto;
mod handlers;
mod interceptors;
mod middleware;
mod models;
mod routes;
mod services;
mod store;
mod utils;

use std::sync::Arc;

use anyhow::Context;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use config::{database, AppConfig, AppState, DatabaseConfig};
use middleware::setup_logging;
use routes::create_router;
use services::{AuthService, QueueService};
use store::{PgQueueStore, PgUserDirectory};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    setup_logging();

    tracing::info!("Starting lounge admin API...");

    // Load configurations
    let app_config = AppConfig::from_env().context("loading application config")?;
    let db_config = DatabaseConfig::from_env().context("loading database config")?;

    tracing::info!(
        "Loaded configuration for environment: {}",
        app_config.environment
    );

    // Create database connection pool and bring the schema up to date
    let db_pool = db_config.create_pool().await.context("connecting to database")?;
    database::run_migrations(&db_pool)
        .await
        .context("running migrations")?;
    tracing::info!("Database ready");

    // First-run administrator, if configured
    let auth_service = AuthService::new(db_pool.clone());
    auth_service
        .ensure_bootstrap_admin(&app_config)
        .await
        .context("creating bootstrap admin")?;

    // Wire the queue core to its Postgres adapters
    let directory = Arc::new(PgUserDirectory::new(db_pool.clone()));
    let queue_service = Arc::new(QueueService::new(
        Arc::new(PgQueueStore::new(db_pool.clone())),
        directory.clone(),
    ));
    tracing::info!("Queue service initialized");

    // Create AppState and router
    let app_state = AppState::new(db_pool, queue_service, directory, app_config.clone());
    let app = create_router(app_state)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http());

    // Start server
    let addr = app_config.server_address();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("binding {addr}"))?;

    tracing::info!("{} is running on {}", app_config.app_name, addr);

    axum::serve(listener, app).await?;

    Ok(())
}
