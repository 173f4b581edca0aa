/**
 * Chat Session Documents
 *
 * A session owns an ordered list of embedded messages. Messages are only
 * ever appended; neither the session nor its messages are edited in place.
 *
 * This module also carries the bodies of the stateless `POST /api/chat`
 * endpoint, which talks to the model without touching any session.
 */
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;
use validator::Validate;

/// Author of a message
///
/// Gemini calls the assistant side `model`; that spelling is accepted on
/// input and normalised to `assistant`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    #[serde(alias = "model")]
    Assistant,
}

/// A message embedded in a [`Session`]
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChatMessage {
    pub message_id: String,
    pub role: Role,
    pub content: String,
    pub timestamp: DateTime<Utc>,
}

impl ChatMessage {
    /// Create a message with a fresh identifier and the current UTC time
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            message_id: Uuid::new_v4().to_string(),
            role,
            content: content.into(),
            timestamp: Utc::now(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self::new(Role::User, content)
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(Role::Assistant, content)
    }
}

/// A chat session as stored and returned by the API
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Session {
    pub session_id: String,
    pub user_id: String,
    pub title: String,
    pub created_at: DateTime<Utc>,
    pub messages: Vec<ChatMessage>,
}

/// Body of `POST /api/sessions`
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateSessionRequest {
    pub user_id: String,
    pub title: String,
}

/// Response of `POST /api/sessions`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CreateSessionResponse {
    pub session_id: String,
}

/// Body of `POST /api/sessions/{id}/messages`
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct NewMessageRequest {
    pub content: String,
}

/// Response of `POST /api/sessions/{id}/messages`
///
/// Carries both messages appended by the call: the user's message and the
/// model's reply, in that order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SendMessageResponse {
    pub message: String,
    pub user_message: ChatMessage,
    pub model_message: ChatMessage,
}

/// Body of `POST /api/chat`
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ChatPrompt {
    pub prompt: String,
}

/// Response of `POST /api/chat`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChatReply {
    pub text: String,
    /// Grounding sources; search grounding is not enabled so this is empty
    pub sources: Vec<Value>,
}

impl ChatReply {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            sources: Vec::new(),
        }
    }
}
