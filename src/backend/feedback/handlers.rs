//! Feedback and analytics sinks.
//!
//! Both accept any well-formed body, stamp it, store it and acknowledge.
//! Nothing here is ever read back over HTTP.

use axum::{http::StatusCode, Json};

use super::db;
use crate::backend::error::BackendError;
use crate::backend::middleware::{DbConn, ValidatedJson};
use crate::shared::{Ack, AnalyticsEvent, AnalyticsEventRequest, Feedback, FeedbackRequest};

/// Record feedback on a chat message
pub async fn submit_feedback(
    DbConn(mut conn): DbConn,
    ValidatedJson(request): ValidatedJson<FeedbackRequest>,
) -> Result<(StatusCode, Json<Ack>), BackendError> {
    let feedback = Feedback::from(request);
    db::insert_feedback(&mut conn, &feedback).await?;
    tracing::debug!(message_id = %feedback.message_id, "feedback stored");

    Ok((StatusCode::CREATED, Json(Ack::new("Feedback received."))))
}

/// Record a client analytics event
pub async fn log_event(
    DbConn(mut conn): DbConn,
    ValidatedJson(request): ValidatedJson<AnalyticsEventRequest>,
) -> Result<(StatusCode, Json<Ack>), BackendError> {
    let event = AnalyticsEvent::from(request);
    db::insert_analytics_event(&mut conn, &event).await?;
    tracing::debug!(event_type = %event.event_type, "analytics event stored");

    Ok((StatusCode::ACCEPTED, Json(Ack::new("Event logged."))))
}
