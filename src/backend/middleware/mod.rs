//! Middleware Module
//!
//! Request-processing pieces that run before handler logic.
//!
//! - **`db`** - `DbConn`, the scoped per-request database connection
//! - **`json`** - `ValidatedJson`, JSON bodies checked against their
//!   `validator` rules
//! - **`layers`** - tower layers wrapped around the whole router (request
//!   tracing, CORS)

pub mod db;
pub mod json;
pub mod layers;

pub use db::{acquire, DbConn};
pub use json::ValidatedJson;
pub use layers::{cors_layer, trace_layer};
