//! Request extraction helpers
//!
//! - [`JsonBody`] wraps `axum::Json` so body rejections come back in the
//!   same `{ "message": ... }` shape as every other error.
//! - [`PathParam`] does the same for path segments that cannot be decoded.
//! - [`parse_id`] turns a path segment into a row id.

use axum::extract::{FromRequest, FromRequestParts};

use crate::backend::error::BackendError;

/// JSON request body with `BackendError` as its rejection
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(BackendError))]
pub struct JsonBody<T>(pub T);

/// Path parameters with `BackendError` as their rejection
///
/// A segment that is not valid UTF-8 after percent-decoding is reported like
/// any other unusable id.
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(BackendError))]
pub struct PathParam<T>(pub T);

/// Parse a path segment as an integer id.
///
/// Surrounding whitespace is ignored. Anything else that is not an integer
/// (including decimals) is rejected before storage is touched.
pub fn parse_id(raw: &str) -> Result<i64, BackendError> {
    raw.trim().parse::<i64>().map_err(|_| {
        tracing::debug!("Rejecting non-numeric id: {:?}", raw);
        BackendError::invalid_id(raw)
    })
}
