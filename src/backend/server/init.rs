/**
 * Server Initialization
 *
 * Opens the database, builds the application state and hands it to the
 * router.
 *
 * # Initialization Process
 *
 * 1. Open the SQLite pool and apply migrations
 * 2. Build the authenticator for the configured strategy
 * 3. Create the router with all routes and layers
 * 4. Start the periodic expired-session cleanup task
 *
 * Unlike a missing optional service, a database that cannot be opened or
 * migrated is fatal: every endpoint needs it.
 */

use std::time::Duration;

use axum::Router;
use sqlx::SqlitePool;
use thiserror::Error;
use tower_sessions::session_store::ExpiredDeletion;
use tower_sessions_sqlx_store::SqliteStore;

use crate::backend::auth::strategy::Authenticator;
use crate::backend::routes::router::create_router;
use crate::backend::server::config::{load_database, ConfigError, ServerConfig};
use crate::backend::server::state::AppState;

/// How often expired sessions are removed from the store
const SESSION_CLEANUP_INTERVAL: Duration = Duration::from_secs(60 * 60);

/// Startup failures
#[derive(Debug, Error)]
pub enum InitError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// Create and configure the Axum application
///
/// # Errors
///
/// Fails when the configuration is invalid or the database cannot be opened
/// or migrated.
pub async fn create_app(config: &ServerConfig) -> Result<Router, InitError> {
    tracing::info!(
        "Initializing REST-Rant backend ({} authentication)",
        config.auth_strategy
    );

    let db_pool = load_database(&config.database_url).await?;
    let app = build_app(db_pool.clone(), config)?;

    let session_store = SqliteStore::new(db_pool);
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(SESSION_CLEANUP_INTERVAL);
        loop {
            interval.tick().await;
            match session_store.delete_expired().await {
                Ok(()) => tracing::debug!("Deleted expired sessions"),
                Err(e) => tracing::error!("Failed to delete expired sessions: {}", e),
            }
        }
    });

    tracing::info!("Router configured with periodic session cleanup task");
    Ok(app)
}

/// Build the application around an already-open pool
///
/// Used by `create_app` and by tests that seed the pool first. The pool must
/// come from `load_database` so the session table exists.
pub fn build_app(db_pool: SqlitePool, config: &ServerConfig) -> Result<Router, InitError> {
    let authenticator = Authenticator::from_config(config)?;
    let app_state = AppState::new(db_pool, authenticator);
    Ok(create_router(app_state, config))
}
