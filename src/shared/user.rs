/**
 * Subscriber Documents
 *
 * This module defines the user document returned by the API and the request
 * bodies accepted by the subscription endpoints.
 *
 * Topics behave as an ordered set: the first occurrence of a topic wins and
 * later duplicates are dropped, both when a user is created and when new
 * topics are merged into an existing subscription.
 */
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use validator::Validate;

/// A subscriber as returned by `GET /api/users/{id}`
///
/// The storage row identifier is never part of this document.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct User {
    /// Client-opaque identifier (UUID v4)
    pub user_id: String,
    /// Unique email address
    pub email: String,
    /// Subscribed topics, without duplicates
    pub topics: Vec<String>,
    /// Free-form preference map (newsletter format, frequency, ...)
    pub preferences: Map<String, Value>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Body of `POST /api/users`
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SubscribeRequest {
    #[validate(email)]
    pub email: String,
    pub topics: Vec<String>,
    /// Only used when the subscription creates a new user
    #[serde(default)]
    pub preferences: Option<Map<String, Value>>,
}

/// Response of `POST /api/users`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SubscribeResponse {
    pub message: String,
    pub user_id: String,
}

/// Body of `PUT /api/users/{id}`
///
/// Each supplied field replaces the stored value; absent fields are left
/// untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdateUserRequest {
    #[serde(default)]
    pub topics: Option<Vec<String>>,
    #[serde(default)]
    pub preferences: Option<Map<String, Value>>,
}

impl UpdateUserRequest {
    /// True when the body carries nothing to update
    pub fn is_empty(&self) -> bool {
        self.topics.is_none() && self.preferences.is_none()
    }
}

/// Remove duplicate topics, keeping the first occurrence of each
pub fn dedupe_topics<I>(topics: I) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    let mut out: Vec<String> = Vec::new();
    for topic in topics {
        if !out.contains(&topic) {
            out.push(topic);
        }
    }
    out
}

/// Append `incoming` topics to `existing`, skipping any already present
pub fn merge_topics(existing: Vec<String>, incoming: &[String]) -> Vec<String> {
    dedupe_topics(existing.into_iter().chain(incoming.iter().cloned()))
}
