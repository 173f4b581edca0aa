//! Backend Error Module
//!
//! This module defines the error type used by HTTP handlers and how it is
//! rendered as a response.
//!
//! # Module Structure
//!
//! ```text
//! error/
//! ├── mod.rs        - Module exports and documentation
//! ├── types.rs      - Error type definitions and status mapping
//! └── conversion.rs - IntoResponse implementation
//! ```
//!
//! # Taxonomy
//!
//! | Variant | Status |
//! |---|---|
//! | `HandlerError` | chosen by the rejecting extractor |
//! | `SharedError` | 422 |
//! | `NotFound` | 404 |
//! | `BadRequest` | 400 |
//! | `ServiceUnavailable` | 500, fixed message |
//! | `ServiceError` | 500, upstream message echoed |
//! | `Database`, `Secret` | 500, generic message |

/// Error type definitions
pub mod types;

/// Error conversion implementations
pub mod conversion;

// Re-export commonly used types
pub use types::{BackendError, DATABASE_UNAVAILABLE};
