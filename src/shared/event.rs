//! Feedback and analytics records.
//!
//! Both are write-once sinks: the request body is checked for shape only and
//! the server stamps the record before storing it. Identifiers are not
//! checked against existing users or messages.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use validator::Validate;

/// Body of `POST /api/feedback`
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct FeedbackRequest {
    pub message_id: String,
    pub user_id: String,
    /// Free-form; stored verbatim
    pub rating: String,
}

/// Stored feedback record
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Feedback {
    pub message_id: String,
    pub user_id: String,
    pub rating: String,
    pub timestamp: DateTime<Utc>,
}

impl From<FeedbackRequest> for Feedback {
    fn from(request: FeedbackRequest) -> Self {
        Self {
            message_id: request.message_id,
            user_id: request.user_id,
            rating: request.rating,
            timestamp: Utc::now(),
        }
    }
}

/// Body of `POST /api/analytics`
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct AnalyticsEventRequest {
    pub user_id: String,
    pub event_type: String,
    pub details: Map<String, Value>,
}

/// Stored analytics event
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AnalyticsEvent {
    pub user_id: String,
    pub event_type: String,
    pub details: Map<String, Value>,
    pub timestamp: DateTime<Utc>,
}

impl From<AnalyticsEventRequest> for AnalyticsEvent {
    fn from(request: AnalyticsEventRequest) -> Self {
        Self {
            user_id: request.user_id,
            event_type: request.event_type,
            details: request.details,
            timestamp: Utc::now(),
        }
    }
}
