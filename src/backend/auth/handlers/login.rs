/**
 * Login Handler
 *
 * Implements `POST /authentication`.
 *
 * # Authentication Process
 *
 * 1. Look up user by email
 * 2. Verify password using bcrypt
 * 3. Establish the authenticated context with the configured strategy
 * 4. Return the public user (and the token, for the token strategy)
 */
use axum::{extract::State, response::Json};
use tower_sessions::Session;

use crate::backend::auth::credentials::verify_credentials;
use crate::backend::auth::handlers::types::{LoginRequest, LoginResponse};
use crate::backend::error::BackendError;
use crate::backend::extract::JsonBody;
use crate::backend::server::state::AppState;

/// Login handler
///
/// # Arguments
///
/// * `State(app_state)` - Database pool and authenticator
/// * `session` - Server-side session (used by the session strategy)
/// * `JsonBody(request)` - Email and password
///
/// # Errors
///
/// * `404 Not Found` - No user with this email
/// * `401 Unauthorized` - Password does not match
/// * `400 Bad Request` - Body is not a JSON object with `email` and `password`
/// * `500 Internal Server Error` - Storage, hashing or session failure
///
/// # Example Request
///
/// ```http
/// POST /authentication HTTP/1.1
/// Content-Type: application/json
///
/// {
///   "email": "user@example.com",
///   "password": "securepassword123"
/// }
/// ```
///
/// # Example Response
///
/// ```json
/// {
///   "user": { "userId": 1, "firstName": "Ada", "email": "user@example.com", ... },
///   "token": "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9..."
/// }
/// ```
pub async fn login(
    State(app_state): State<AppState>,
    session: Session,
    JsonBody(request): JsonBody<LoginRequest>,
) -> Result<Json<LoginResponse>, BackendError> {
    let user = verify_credentials(&app_state.db_pool, &request.email, &request.password).await?;

    let token = app_state.auth.establish(&session, user.user_id).await?;

    tracing::info!(
        "User {} logged in ({} strategy)",
        user.user_id,
        app_state.auth.strategy()
    );

    Ok(Json(LoginResponse {
        user: user.to_public(),
        token,
    }))
}
