//! Backend Module
//!
//! This module contains all server-side code for UP2D8: an Axum HTTP server
//! that stores subscribers, chat sessions and client events, and relays chat
//! prompts to a generative model.
//!
//! # Architecture
//!
//! The backend is organized into focused submodules:
//!
//! - **`server`** - Server initialization, application state, database pool
//! - **`routes`** - HTTP route configuration and router assembly
//! - **`users`** - Newsletter subscribers and their preferences
//! - **`chat`** - One-shot chat and persistent chat sessions
//! - **`feedback`** - Feedback and analytics sinks
//! - **`articles`** - Read-only article feed
//! - **`ai`** - Text generation (Gemini)
//! - **`secrets`** - Secret store access (Key Vault, environment)
//! - **`middleware`** - Extractors and tower layers
//! - **`error`** - Backend error type and its HTTP rendering
//!
//! # Module Structure
//!
//! ```text
//! backend/
//! ├── mod.rs          - Module exports and documentation
//! ├── main.rs         - Binary entry point
//! ├── server/         - Server initialization and state
//! ├── routes/         - Route configuration
//! ├── users/          - User handlers and repository
//! ├── chat/           - Chat handlers and repository
//! ├── feedback/       - Feedback/analytics handlers and repository
//! ├── articles/       - Article handlers and repository
//! ├── ai/             - TextGenerator trait and Gemini client
//! ├── secrets/        - SecretProvider trait and providers
//! ├── middleware/     - DbConn, ValidatedJson, CORS and tracing layers
//! └── error/          - Error types
//! ```
//!
//! # State Management
//!
//! `AppState` is built once at startup and holds the optional SQLite pool,
//! the text generator and the configuration. Nothing in it changes while
//! requests are served. Each request that needs the database checks out
//! one pooled connection through the `DbConn` extractor and returns it when
//! the handler finishes.
//!
//! # Error Handling
//!
//! Handlers return `Result<_, BackendError>`. Every failure is rendered as
//! `{"detail": "..."}` with the matching status code.

/// Server setup and configuration
pub mod server;

/// Route configuration
pub mod routes;

/// Backend error types
pub mod error;

/// Extractors and layers
pub mod middleware;

/// Secret store access
pub mod secrets;

/// Text generation
pub mod ai;

/// Subscriber management
pub mod users;

/// Chat and chat sessions
pub mod chat;

/// Feedback and analytics
pub mod feedback;

/// Article feed
pub mod articles;

/// Re-export commonly used types
pub use error::BackendError;
pub use server::{create_app, AppState};
