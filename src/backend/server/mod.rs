//! Server Module
//!
//! Startup code for the Axum HTTP server: shared state, the database pool,
//! and the sequence that ties them together.
//!
//! # Architecture
//!
//! - **`state`** - Application state structure and `FromRef` implementations
//! - **`config`** - Database pool creation and migrations
//! - **`init`** - Server initialization and app creation
//!
//! # Module Structure
//!
//! ```text
//! server/
//! ├── mod.rs          - Module exports and documentation
//! ├── state.rs        - AppState and FromRef implementations
//! ├── config.rs       - Database connection (SQLite pool, migrations)
//! └── init.rs         - Server initialization and app creation
//! ```
//!
//! # State Management
//!
//! `AppState` holds the optional database pool, the text generator and the
//! configuration. It is built once and only read afterwards.

/// Application state management
pub mod state;

/// Database connection
pub mod config;

/// Server initialization
pub mod init;

pub use init::create_app;
pub use state::AppState;
