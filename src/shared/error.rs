//! Shared Error Types
//!
//! This module defines error types raised while validating API documents,
//! before any handler logic runs.
//!
//! # Error Categories
//!
//! - `ValidationError` - Field rules such as the email format check, or a
//!   document missing a field the storage layer keys on
use thiserror::Error;
use validator::ValidationErrors;

/// Errors raised while checking inbound documents
#[derive(Debug, Error, Clone)]
pub enum SharedError {
    /// Data validation error
    #[error("Validation error in field '{field}': {message}")]
    ValidationError {
        /// The field that failed validation
        field: String,
        /// Human-readable error message
        message: String,
    },
}

impl SharedError {
    /// Create a new validation error
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ValidationError {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Report the first failing field; the rest are folded into the message.
impl From<ValidationErrors> for SharedError {
    fn from(errors: ValidationErrors) -> Self {
        let field = errors
            .field_errors()
            .keys()
            .next()
            .map(|name| name.to_string())
            .unwrap_or_default();
        Self::validation(field, errors.to_string())
    }
}
