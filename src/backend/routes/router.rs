/**
 * Router Configuration
 *
 * Combines the API routes, the JSON 404 and 405 fallbacks and the middleware
 * stack into a single Axum router.
 *
 * # Layer Order
 *
 * Outermost first:
 * 1. `TraceLayer` - request/response logging
 * 2. `SessionManagerLayer` - loads and saves the server-side session in
 *    SQLite; a session unused for `session_ttl` expires
 * 3. `resolve_current_user` - attaches `CurrentUser` (needs the session)
 */

use axum::{http::StatusCode, middleware, response::Json, Router};
use serde_json::{json, Value};
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;
use tower_sessions::{cookie::time, Expiry, SessionManagerLayer};
use tower_sessions_sqlx_store::SqliteStore;

use crate::backend::middleware::resolve_current_user;
use crate::backend::routes::api_routes::configure_api_routes;
use crate::backend::server::config::ServerConfig;
use crate::backend::server::state::AppState;

/// Create the Axum router with all routes configured
///
/// # Arguments
///
/// * `app_state` - Database pool and authenticator
/// * `config` - Session cookie settings
pub fn create_router(app_state: AppState, config: &ServerConfig) -> Router<()> {
    let session_store = SqliteStore::new(app_state.db_pool.clone());
    let session_layer = SessionManagerLayer::new(session_store)
        .with_secure(config.secure_cookies)
        .with_expiry(Expiry::OnInactivity(time::Duration::seconds(
            config.session_ttl.num_seconds(),
        )));

    let router = configure_api_routes(Router::new());

    router
        .fallback(not_found)
        .method_not_allowed_fallback(method_not_allowed)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(session_layer)
                .layer(middleware::from_fn_with_state(
                    app_state.clone(),
                    resolve_current_user,
                )),
        )
        .with_state(app_state)
}

/// Fallback for unknown routes
async fn not_found() -> (StatusCode, Json<Value>) {
    (StatusCode::NOT_FOUND, Json(json!({ "message": "Not found" })))
}

/// Fallback for known paths hit with an unsupported method
async fn method_not_allowed() -> (StatusCode, Json<Value>) {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        Json(json!({ "message": "Method not allowed" })),
    )
}
