/**
 * Current-User Middleware
 *
 * Resolves the request's credentials (session or bearer token, depending on
 * the configured strategy) to a user once per request and attaches the
 * result as [`CurrentUser`]. Handlers take `CurrentUser` as a parameter and
 * decide for themselves whether an anonymous request is acceptable.
 *
 * Unknown or invalid credentials resolve to an anonymous request rather than
 * an error; only a storage failure aborts the request.
 */

use std::convert::Infallible;

use axum::{
    extract::{FromRequestParts, Request, State},
    http::request::Parts,
    middleware::Next,
    response::{IntoResponse, Response},
};
use tower_sessions::Session;

use crate::backend::auth::users::{get_user_by_id, User};
use crate::backend::error::BackendError;
use crate::backend::server::state::AppState;

/// The user the request is authenticated as, if any
#[derive(Clone, Debug, Default)]
pub struct CurrentUser(pub Option<User>);

impl CurrentUser {
    pub fn user_id(&self) -> Option<i64> {
        self.0.as_ref().map(|user| user.user_id)
    }
}

/// Resolve the current user and attach it to the request extensions
pub async fn resolve_current_user(
    State(app_state): State<AppState>,
    session: Session,
    mut request: Request,
    next: Next,
) -> Response {
    let user = match app_state
        .auth
        .resolve_user_id(&session, request.headers())
        .await
    {
        Some(user_id) => match get_user_by_id(&app_state.db_pool, user_id).await {
            Ok(Some(user)) => Some(user),
            Ok(None) => {
                tracing::warn!("Credentials reference missing user {}", user_id);
                None
            }
            Err(e) => return BackendError::from(e).into_response(),
        },
        None => None,
    };

    request.extensions_mut().insert(CurrentUser(user));
    next.run(request).await
}

impl<S> FromRequestParts<S> for CurrentUser
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(parts
            .extensions
            .get::<CurrentUser>()
            .cloned()
            .unwrap_or_default())
    }
}
