//! Shared Error Types
//!
//! Raised while turning a client payload into a place or comment. They carry
//! no HTTP knowledge; the backend reports them as `400 Bad Request`.
//!
//! ```rust
//! use rest_rant::shared::error::SharedError;
//!
//! let error = SharedError::invalid_payload("place", "founded: expected an integer year");
//! assert_eq!(error.to_string(), "Invalid place: founded: expected an integer year");
//! ```
use thiserror::Error;

/// Errors raised by the shared model layer
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SharedError {
    /// A place or comment body has a well-known key holding the wrong JSON type
    #[error("Invalid {payload}: {message}")]
    InvalidPayload {
        /// Which kind of payload (`place`, `comment`)
        payload: &'static str,
        /// What serde rejected
        message: String,
    },
}

impl SharedError {
    pub fn invalid_payload(payload: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidPayload {
            payload,
            message: message.into(),
        }
    }
}
