/**
 * Backend Error Types
 *
 * This module defines the error type returned by every HTTP handler.
 *
 * # Error Categories
 *
 * ## Client errors
 *
 * - Body rejections raised by the JSON extractor (syntax, data, content type)
 * - Field validation failures (invalid email)
 * - Lookups of unknown identifiers
 * - Updates that carry nothing to update
 *
 * ## Server errors
 *
 * - The database is unavailable or no connection could be checked out
 * - The generative model call failed
 * - A query failed
 * - The secret store could not be read
 *
 * Callers only see the status code and a free-text `detail` string; query
 * and secret-store failures are logged in full but answered generically.
 */

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use thiserror::Error;
use validator::ValidationErrors;

use crate::backend::ai::AiError;
use crate::backend::secrets::SecretError;
use crate::shared::SharedError;

/// Fixed detail returned when no database connection is available
pub const DATABASE_UNAVAILABLE: &str = "Failed to connect to the database";

/// Backend-specific error types
#[derive(Debug, Error)]
pub enum BackendError {
    /// Request rejected before reaching handler logic, with the status chosen
    /// by the rejecting extractor
    #[error("Handler error: {message}")]
    HandlerError {
        /// HTTP status code for this error
        status: StatusCode,
        /// Human-readable error message
        message: String,
    },

    /// Field validation error (from the shared module)
    #[error(transparent)]
    SharedError(#[from] SharedError),

    /// Entity lookup by identifier found nothing
    #[error("Not found: {0}")]
    NotFound(String),

    /// Request is well-formed but semantically empty
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// No database connection could be obtained
    #[error("Database unavailable")]
    ServiceUnavailable,

    /// The generative model failed
    #[error("Service error: {0}")]
    ServiceError(String),

    /// A query failed
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// The secret store failed
    #[error("Secret store error: {0}")]
    Secret(#[from] SecretError),
}

impl BackendError {
    /// Create a new handler error with a status code
    pub fn handler(status: StatusCode, message: impl Into<String>) -> Self {
        Self::HandlerError {
            status,
            message: message.into(),
        }
    }

    /// Create a new not-found error
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    /// Create a new bad-request error
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest(message.into())
    }

    /// Create a new service error carrying the upstream message
    pub fn service(message: impl Into<String>) -> Self {
        Self::ServiceError(message.into())
    }

    /// Get the HTTP status code for this error
    ///
    /// # Status Code Mapping
    ///
    /// - `HandlerError` - Uses the status code from the error
    /// - `SharedError` - 422 Unprocessable Entity
    /// - `NotFound` - 404 Not Found
    /// - `BadRequest` - 400 Bad Request
    /// - everything else - 500 Internal Server Error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::HandlerError { status, .. } => *status,
            Self::SharedError(SharedError::ValidationError { .. }) => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::ServiceUnavailable
            | Self::ServiceError(_)
            | Self::Database(_)
            | Self::Secret(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the message returned to the client
    pub fn message(&self) -> String {
        match self {
            Self::HandlerError { message, .. } => message.clone(),
            Self::SharedError(err) => err.to_string(),
            Self::NotFound(message) | Self::BadRequest(message) => message.clone(),
            Self::ServiceUnavailable => DATABASE_UNAVAILABLE.to_string(),
            Self::ServiceError(message) => message.clone(),
            Self::Database(_) | Self::Secret(_) => "Internal server error".to_string(),
        }
    }
}

impl From<JsonRejection> for BackendError {
    fn from(rejection: JsonRejection) -> Self {
        Self::handler(rejection.status(), rejection.body_text())
    }
}

impl From<ValidationErrors> for BackendError {
    fn from(errors: ValidationErrors) -> Self {
        Self::SharedError(errors.into())
    }
}

impl From<AiError> for BackendError {
    fn from(err: AiError) -> Self {
        Self::service(format!("Error generating content: {}", err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_handler_error() {
        let error = BackendError::handler(StatusCode::UNSUPPORTED_MEDIA_TYPE, "Expected JSON");
        assert_eq!(error.status_code(), StatusCode::UNSUPPORTED_MEDIA_TYPE);
        assert_eq!(error.message(), "Expected JSON");
    }

    #[test]
    fn test_client_error_status_codes() {
        assert_eq!(
            BackendError::not_found("User not found.").status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            BackendError::bad_request("No update data provided.").status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            BackendError::from(SharedError::validation("email", "bad")).status_code(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
    }

    #[test]
    fn test_service_unavailable_has_fixed_message() {
        let error = BackendError::ServiceUnavailable;
        assert_eq!(error.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(error.message(), DATABASE_UNAVAILABLE);
    }

    #[test]
    fn test_ai_error_message_is_echoed() {
        let error = BackendError::from(AiError::Client("quota exceeded".to_string()));
        assert_eq!(error.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(error.message().contains("quota exceeded"));
    }

    #[test]
    fn test_database_error_is_not_leaked() {
        let error = BackendError::from(sqlx::Error::RowNotFound);
        assert_eq!(error.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(error.message(), "Internal server error");
    }
}
