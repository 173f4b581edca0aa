//! Route Configuration Module
//!
//! This module configures all HTTP routes for the backend server.
//! Routes are organized by functionality into focused submodules.
//!
//! # Architecture
//!
//! - **`router`** - Main router creation, root route, fallback and layers
//! - **`chat_routes`** - One-shot chat and chat sessions
//! - **`api_routes`** - Users, feedback, analytics and articles
//!
//! # Module Structure
//!
//! ```text
//! routes/
//! ├── mod.rs          - Module exports and documentation
//! ├── router.rs       - Main router creation
//! ├── chat_routes.rs  - Chat routes
//! └── api_routes.rs   - Remaining API routes
//! ```
//!
//! Every error, including the 404 for unknown paths, is a JSON body of the
//! form `{"detail": "..."}`.

/// Main router creation
pub mod router;

/// Chat routes
pub mod chat_routes;

/// API routes
pub mod api_routes;

pub use router::create_router;
