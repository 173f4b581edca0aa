//! Feedback and analytics collection (`/api/feedback`, `/api/analytics`).

pub mod db;
pub mod handlers;

pub use handlers::{log_event, submit_feedback};
