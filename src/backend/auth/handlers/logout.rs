//! Logout handler

use axum::{extract::State, response::Json};
use tower_sessions::Session;

use crate::backend::auth::handlers::types::MessageResponse;
use crate::backend::error::BackendError;
use crate::backend::middleware::CurrentUser;
use crate::backend::server::state::AppState;

/// `POST /authentication/logout`
///
/// Flushes the session for the session strategy. Tokens cannot be revoked,
/// so for the token strategy the client is expected to discard its token.
pub async fn logout(
    State(app_state): State<AppState>,
    current: CurrentUser,
    session: Session,
) -> Result<Json<MessageResponse>, BackendError> {
    app_state.auth.end(&session).await?;

    if let Some(user_id) = current.user_id() {
        tracing::info!("User {} logged out", user_id);
    }

    Ok(Json(MessageResponse::new("Logged out")))
}
