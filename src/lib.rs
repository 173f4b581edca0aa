//! UP2D8 - Backend Library
//!
//! UP2D8 is the backend-for-frontend of a news digest and chat application.
//! It exposes JSON endpoints for subscription management, chat sessions
//! backed by the Gemini API, an articles feed, and write-only feedback and
//! analytics sinks.
//!
//! # Module Structure
//!
//! - **`shared`** - API documents, configuration and validation errors
//!   - User, session, message, feedback and analytics types
//!   - `AppConfig` and its builder
//!
//! - **`backend`** - The Axum server
//!   - Secret loading (Azure Key Vault or environment)
//!   - SQLite connection pool and migrations
//!   - Gemini text generation
//!   - Route handlers, extractors and error responses
//!
//! # Request Flow
//!
//! 1. `TraceLayer` opens a span for the request
//! 2. Extractors check out a pooled database connection and parse the body
//! 3. The handler performs its document operations, optionally calling the
//!    model
//! 4. The result, or a `BackendError`, is serialized to JSON
//!
//! # Error Handling
//!
//! - `Result<T, E>` with `?` propagation everywhere
//! - `thiserror` enums per layer, converging on `backend::error::BackendError`
//!   which renders as `{"detail": "..."}`

/// API documents, configuration and shared errors
pub mod shared;

/// Backend server-side code
pub mod backend;
