//! Write-only storage for feedback and analytics events.

use sqlx::types::Json;
use sqlx::SqliteConnection;

use crate::shared::{AnalyticsEvent, Feedback};

/// Store one feedback record
pub async fn insert_feedback(
    conn: &mut SqliteConnection,
    feedback: &Feedback,
) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        INSERT INTO feedback (message_id, user_id, rating, timestamp)
        VALUES (?1, ?2, ?3, ?4)
        "#,
    )
    .bind(&feedback.message_id)
    .bind(&feedback.user_id)
    .bind(&feedback.rating)
    .bind(feedback.timestamp)
    .execute(&mut *conn)
    .await?;

    Ok(())
}

/// Store one analytics event
pub async fn insert_analytics_event(
    conn: &mut SqliteConnection,
    event: &AnalyticsEvent,
) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        INSERT INTO analytics (user_id, event_type, details, timestamp)
        VALUES (?1, ?2, ?3, ?4)
        "#,
    )
    .bind(&event.user_id)
    .bind(&event.event_type)
    .bind(Json(&event.details))
    .bind(event.timestamp)
    .execute(&mut *conn)
    .await?;

    Ok(())
}
