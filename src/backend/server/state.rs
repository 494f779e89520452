/**
 * Application State Management
 *
 * This module defines the application state structure and implements the
 * `FromRef` traits for Axum state extraction.
 *
 * # Thread Safety
 *
 * `SqlitePool` is internally reference counted and synchronized, and the
 * authenticator is immutable after startup, so cloning `AppState` into each
 * request is cheap and needs no locks.
 */

use axum::extract::FromRef;
use sqlx::SqlitePool;

use crate::backend::auth::strategy::Authenticator;

/// Application state shared by every handler
///
/// # Usage
///
/// ```rust,no_run
/// use rest_rant::backend::server::state::AppState;
/// use axum::extract::State;
///
/// async fn handler(State(app_state): State<AppState>) {
///     let _pool = &app_state.db_pool;
/// }
/// ```
#[derive(Clone)]
pub struct AppState {
    /// SQLite connection pool
    pub db_pool: SqlitePool,
    /// Configured authentication strategy
    pub auth: Authenticator,
}

impl AppState {
    pub fn new(db_pool: SqlitePool, auth: Authenticator) -> Self {
        Self { db_pool, auth }
    }
}

/// Lets handlers that only touch storage take `State<SqlitePool>`
impl FromRef<AppState> for SqlitePool {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.db_pool.clone()
    }
}

impl FromRef<AppState> for Authenticator {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.auth.clone()
    }
}
