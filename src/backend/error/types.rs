/**
 * Backend Error Types
 *
 * This module defines the single error type returned by HTTP handlers.
 *
 * # Error Categories
 *
 * ## Client Errors
 *
 * Raised where the condition is detected and reported verbatim:
 * - Non-numeric path ids
 * - Malformed or wrongly-typed request bodies
 * - Missing places, comments or users
 * - Bad credentials and missing authentication
 * - Deleting somebody else's comment
 *
 * ## Internal Errors
 *
 * Storage, hashing, token signing and session store failures. These are
 * logged with their cause and reported to the client as a generic message.
 */

use axum::http::StatusCode;
use thiserror::Error;

use crate::shared::SharedError;

/// Message sent to clients for every internal error
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

/// Backend error types
///
/// Every variant maps to one HTTP status code. Handlers return
/// `Result<_, BackendError>` and propagate with `?`; conversion to a response
/// happens in one place (`IntoResponse` in `conversion.rs`).
///
/// # Usage
///
/// ```rust,no_run
/// use rest_rant::backend::error::BackendError;
///
/// let err = BackendError::not_found("Could not find place with id \"3\"");
/// assert_eq!(err.status_code().as_u16(), 404);
/// ```
#[derive(Debug, Error)]
pub enum BackendError {
    /// A path id that is not an integer
    ///
    /// Reported as `404` with the message `Invalid id "NaN"`, the response
    /// existing clients already handle.
    #[error("Invalid id \"NaN\"")]
    InvalidId {
        /// The raw path segment, kept for logging
        raw: String,
    },

    /// Request body could not be parsed or has fields of the wrong type
    #[error("{message}")]
    MalformedBody {
        /// Human-readable error message
        message: String,
    },

    /// A user, place or comment does not exist
    #[error("{message}")]
    NotFound {
        /// Human-readable error message
        message: String,
    },

    /// Bad credentials, or authentication required but absent
    #[error("{message}")]
    Unauthorized {
        /// Human-readable error message
        message: String,
    },

    /// Authenticated but not allowed
    #[error("{message}")]
    Forbidden {
        /// Human-readable error message
        message: String,
    },

    /// Payload validation error from the shared model layer
    #[error(transparent)]
    SharedError(#[from] SharedError),

    /// Storage failure
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// bcrypt failure (corrupt digest, invalid cost)
    #[error("Password hashing error: {0}")]
    PasswordHash(#[from] bcrypt::BcryptError),

    /// Token signing failure
    #[error("Token error: {0}")]
    Token(#[from] jsonwebtoken::errors::Error),

    /// Session store failure
    #[error("Session error: {0}")]
    Session(#[from] tower_sessions::session::Error),
}

impl BackendError {
    /// Create an invalid id error for a raw path segment
    pub fn invalid_id(raw: impl Into<String>) -> Self {
        Self::InvalidId { raw: raw.into() }
    }

    /// Create a malformed body error
    pub fn malformed_body(message: impl Into<String>) -> Self {
        Self::MalformedBody {
            message: message.into(),
        }
    }

    /// Create a not found error
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    /// Create an unauthorized error
    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::Unauthorized {
            message: message.into(),
        }
    }

    /// Create a forbidden error
    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::Forbidden {
            message: message.into(),
        }
    }

    /// Get the HTTP status code for this error
    ///
    /// # Status Code Mapping
    ///
    /// - `InvalidId`, `NotFound` - 404 Not Found
    /// - `MalformedBody`, `SharedError` - 400 Bad Request
    /// - `Unauthorized` - 401 Unauthorized
    /// - `Forbidden` - 403 Forbidden
    /// - everything else - 500 Internal Server Error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidId { .. } | Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::MalformedBody { .. } | Self::SharedError(_) => StatusCode::BAD_REQUEST,
            Self::Unauthorized { .. } => StatusCode::UNAUTHORIZED,
            Self::Forbidden { .. } => StatusCode::FORBIDDEN,
            Self::Database(_) | Self::PasswordHash(_) | Self::Token(_) | Self::Session(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// True for failures the client cannot fix
    pub fn is_internal(&self) -> bool {
        self.status_code() == StatusCode::INTERNAL_SERVER_ERROR
    }

    /// Get the message shown to the client
    ///
    /// Internal errors never expose their cause.
    pub fn message(&self) -> String {
        if self.is_internal() {
            INTERNAL_ERROR_MESSAGE.to_string()
        } else {
            self.to_string()
        }
    }
}
