/**
 * Authentication Handler Types
 *
 * Request and response bodies for the `/authentication` endpoints.
 */

use serde::{Deserialize, Serialize};

use crate::shared::PublicUser;

/// Login request
#[derive(Deserialize, Serialize, Debug)]
pub struct LoginRequest {
    /// Login key; matched exactly
    pub email: String,
    /// Plaintext password (verified against the stored digest, never logged)
    pub password: String,
}

/// Login response
///
/// `token` is only present when the token strategy is configured; with the
/// session strategy the session cookie carries the authentication.
#[derive(Serialize, Deserialize, Debug)]
pub struct LoginResponse {
    pub user: PublicUser,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
}

/// Plain `{ "message": ... }` body
#[derive(Serialize, Deserialize, Debug, PartialEq)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
