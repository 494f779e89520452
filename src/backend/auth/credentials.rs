//! Credential verification
//!
//! Looks a user up by exact email and checks the submitted password against
//! the stored bcrypt digest. Passwords are never logged.

use bcrypt::{hash, verify};
use sqlx::SqlitePool;

use crate::backend::auth::users::{get_user_by_email, User};
use crate::backend::error::BackendError;

/// Message when no user has the submitted email
pub const UNKNOWN_USER_MESSAGE: &str =
    "Could not find a user with the provided username and password";

/// Message when the password does not match the digest
pub const WRONG_PASSWORD_MESSAGE: &str =
    "Password did not match the existing password stored for the user.";

/// Hash a plaintext password for storage
pub fn hash_password(password: &str, cost: u32) -> Result<String, BackendError> {
    Ok(hash(password, cost)?)
}

/// Verify an email/password pair
///
/// # Errors
///
/// * `NotFound` - no user with this email
/// * `Unauthorized` - the password does not match
/// * `Database` / `PasswordHash` - storage or digest failures
pub async fn verify_credentials(
    pool: &SqlitePool,
    email: &str,
    password: &str,
) -> Result<User, BackendError> {
    let user = get_user_by_email(pool, email).await?.ok_or_else(|| {
        tracing::warn!("Login attempt for unknown email");
        BackendError::not_found(UNKNOWN_USER_MESSAGE)
    })?;

    if !verify(password, &user.password_digest)? {
        tracing::warn!("Password mismatch for user {}", user.user_id);
        return Err(BackendError::unauthorized(WRONG_PASSWORD_MESSAGE));
    }

    Ok(user)
}
