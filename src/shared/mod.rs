//! Shared Module
//!
//! This module contains the request/response documents exchanged over the
//! HTTP API together with the configuration and error types used across the
//! backend. Everything here is plain data: serde derives, validation rules
//! and a few pure helpers, with no database or network access.
//!
//! # Overview
//!
//! - **`user`** - subscriber documents and topic merging
//! - **`session`** - chat sessions, embedded messages and chat prompts
//! - **`event`** - feedback and analytics write-only records
//! - **`error`** - shared validation errors
//! - **`config`** - application configuration loaded at startup

/// Subscriber documents
pub mod user;

/// Chat sessions and messages
pub mod session;

/// Feedback and analytics records
pub mod event;

/// Shared error types
pub mod error;

/// Application configuration
pub mod config;

use serde::{Deserialize, Serialize};

/// Re-export commonly used types for convenience
pub use user::{SubscribeRequest, SubscribeResponse, UpdateUserRequest, User};
pub use session::{
    ChatMessage, ChatPrompt, ChatReply, CreateSessionRequest, CreateSessionResponse,
    NewMessageRequest, Role, SendMessageResponse, Session,
};
pub use event::{AnalyticsEvent, AnalyticsEventRequest, Feedback, FeedbackRequest};
pub use error::SharedError;
pub use config::{AppConfig, AppConfigBuilder, ConfigError};

/// Plain acknowledgement body, `{"message": "..."}`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Ack {
    pub message: String,
}

impl Ack {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
