/**
 * Error Conversion
 *
 * `BackendError` implements `IntoResponse`, so handlers return it directly.
 *
 * # Response Format
 *
 * ```json
 * {
 *   "detail": "User not found."
 * }
 * ```
 */

use axum::{
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::backend::error::types::BackendError;

impl IntoResponse for BackendError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        match &self {
            BackendError::Database(err) => tracing::error!(error = %err, "database query failed"),
            BackendError::Secret(err) => tracing::error!(error = %err, "secret store failed"),
            BackendError::ServiceUnavailable => tracing::error!("no database connection available"),
            BackendError::ServiceError(message) => tracing::error!(%message, "model call failed"),
            other => tracing::warn!(status = status.as_u16(), error = %other, "request rejected"),
        }

        (status, Json(json!({ "detail": self.message() }))).into_response()
    }
}
