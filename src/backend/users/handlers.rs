//! User HTTP Handlers
//!
//! Subscription and preference management under `/api/users`.

use axum::{extract::Path, Json};

use super::db::{self, Subscription};
use crate::backend::error::BackendError;
use crate::backend::middleware::{DbConn, ValidatedJson};
use crate::shared::{Ack, SubscribeRequest, SubscribeResponse, UpdateUserRequest, User};

/// Subscribe an email address, merging topics if it is already known
pub async fn subscribe_user(
    DbConn(mut conn): DbConn,
    ValidatedJson(request): ValidatedJson<SubscribeRequest>,
) -> Result<Json<SubscribeResponse>, BackendError> {
    let preferences = request.preferences.unwrap_or_default();
    let subscription = db::subscribe(&mut conn, &request.email, &request.topics, &preferences).await?;

    let message = match &subscription {
        Subscription::Created(user_id) => {
            tracing::info!(%user_id, "new subscriber");
            "Subscription confirmed."
        }
        Subscription::Existing(user_id) => {
            tracing::info!(%user_id, "topics merged for existing subscriber");
            "User with this email already exists. Topics updated."
        }
    };

    Ok(Json(SubscribeResponse {
        message: message.to_string(),
        user_id: subscription.user_id().to_string(),
    }))
}

/// Get a user document
pub async fn get_user(
    DbConn(mut conn): DbConn,
    Path(user_id): Path<String>,
) -> Result<Json<User>, BackendError> {
    db::get_user_by_id(&mut conn, &user_id)
        .await?
        .map(Json)
        .ok_or_else(|| BackendError::not_found("User not found."))
}

/// Replace topics and/or preferences
///
/// An empty body is rejected before the user is looked up.
pub async fn update_user(
    DbConn(mut conn): DbConn,
    Path(user_id): Path<String>,
    ValidatedJson(request): ValidatedJson<UpdateUserRequest>,
) -> Result<Json<Ack>, BackendError> {
    if request.is_empty() {
        return Err(BackendError::bad_request("No update data provided."));
    }

    let updated = db::update_user(
        &mut conn,
        &user_id,
        request.topics.as_deref(),
        request.preferences.as_ref(),
    )
    .await?;

    if !updated {
        return Err(BackendError::not_found("User not found."));
    }
    Ok(Json(Ack::new("Preferences updated.")))
}

/// Delete a user
pub async fn delete_user(
    DbConn(mut conn): DbConn,
    Path(user_id): Path<String>,
) -> Result<Json<Ack>, BackendError> {
    if !db::delete_user(&mut conn, &user_id).await? {
        return Err(BackendError::not_found("User not found."));
    }
    tracing::info!(%user_id, "user deleted");
    Ok(Json(Ack::new("User deleted successfully.")))
}
