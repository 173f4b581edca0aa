//! Chat Backend Module
//!
//! Server-side chat functionality:
//! - One-shot prompting of the text generator
//! - Chat sessions with an embedded, append-only message history
//!
//! # Architecture
//!
//! - **`handlers`** - HTTP handlers for `/api/chat` and `/api/sessions`
//! - **`db`** - Database operations for sessions and their messages

/// HTTP handlers
pub mod handlers;

/// Database operations for sessions and messages
pub mod db;

pub use handlers::{chat, create_session, list_messages, list_sessions, send_message};
