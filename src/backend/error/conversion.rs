/**
 * Error Conversion
 *
 * Conversion of backend errors into HTTP responses, and of framework
 * rejections into backend errors.
 *
 * # Response Format
 *
 * Every error response is JSON with a single field:
 * ```json
 * { "message": "Could not find place with id \"3\"" }
 * ```
 */

use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    response::{IntoResponse, Response},
    Json,
};

use crate::backend::error::types::BackendError;

impl IntoResponse for BackendError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if self.is_internal() {
            tracing::error!("Request failed: {}", self);
        } else {
            tracing::debug!("Request rejected ({}): {}", status, self);
        }

        let body = serde_json::json!({ "message": self.message() });
        (status, Json(body)).into_response()
    }
}

impl From<JsonRejection> for BackendError {
    fn from(rejection: JsonRejection) -> Self {
        BackendError::malformed_body(rejection.body_text())
    }
}

impl From<PathRejection> for BackendError {
    fn from(rejection: PathRejection) -> Self {
        match rejection {
            PathRejection::FailedToDeserializePathParams(error) => {
                BackendError::invalid_id(error.body_text())
            }
            other => {
                tracing::error!("Path extraction failed: {}", other.body_text());
                BackendError::malformed_body(other.body_text())
            }
        }
    }
}
