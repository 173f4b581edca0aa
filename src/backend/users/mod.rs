//! Users Module
//!
//! Newsletter subscribers: one document per email address holding the
//! subscribed topics and free-form preferences.
//!
//! # Module Structure
//!
//! ```text
//! users/
//! ├── mod.rs       - Module exports
//! ├── db.rs        - Repository functions over the users table
//! └── handlers.rs  - HTTP handlers for /api/users
//! ```

pub mod db;
pub mod handlers;

pub use handlers::{delete_user, get_user, subscribe_user, update_user};
