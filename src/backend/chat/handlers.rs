//! Chat HTTP Handlers
//!
//! Stateless prompting (`POST /api/chat`) and persistent chat sessions.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};
use sqlx::SqlitePool;

use super::db;
use crate::backend::ai::TextGenerator;
use crate::backend::error::BackendError;
use crate::backend::middleware::{acquire, DbConn, ValidatedJson};
use crate::shared::{
    ChatMessage, ChatPrompt, ChatReply, CreateSessionRequest, CreateSessionResponse,
    NewMessageRequest, SendMessageResponse, Session,
};

/// One-shot prompt with no history
pub async fn chat(
    State(generator): State<Arc<dyn TextGenerator>>,
    ValidatedJson(request): ValidatedJson<ChatPrompt>,
) -> Result<Json<ChatReply>, BackendError> {
    let text = generator.generate(&[], &request.prompt).await?;
    Ok(Json(ChatReply::text(text)))
}

/// Start a new, empty session
pub async fn create_session(
    DbConn(mut conn): DbConn,
    ValidatedJson(request): ValidatedJson<CreateSessionRequest>,
) -> Result<Json<CreateSessionResponse>, BackendError> {
    let session = db::create_session(&mut conn, &request.user_id, &request.title).await?;
    tracing::info!(session_id = %session.session_id, user_id = %session.user_id, "session created");

    Ok(Json(CreateSessionResponse {
        session_id: session.session_id,
    }))
}

/// Sessions of a user, oldest first
pub async fn list_sessions(
    DbConn(mut conn): DbConn,
    Path(user_id): Path<String>,
) -> Result<Json<Vec<Session>>, BackendError> {
    let sessions = db::list_sessions_for_user(&mut conn, &user_id).await?;
    Ok(Json(sessions))
}

/// Send a message within a session
///
/// The model sees the stored history plus the new content. The user message
/// and the reply are appended together, and only once the reply exists. No
/// database connection is held while the model is answering.
pub async fn send_message(
    State(generator): State<Arc<dyn TextGenerator>>,
    State(db_pool): State<Option<SqlitePool>>,
    Path(session_id): Path<String>,
    ValidatedJson(request): ValidatedJson<NewMessageRequest>,
) -> Result<Json<SendMessageResponse>, BackendError> {
    let history = {
        let mut conn = acquire(db_pool.as_ref()).await?;
        db::get_messages(&mut conn, &session_id)
            .await?
            .ok_or_else(|| BackendError::not_found("Session not found."))?
    };

    let user_message = ChatMessage::user(request.content);
    let reply = generator.generate(&history, &user_message.content).await?;
    let model_message = ChatMessage::assistant(reply);

    let mut conn = acquire(db_pool.as_ref()).await?;
    let appended = db::append_messages(
        &mut conn,
        &session_id,
        &[user_message.clone(), model_message.clone()],
    )
    .await?;
    if !appended {
        // Deleted while the model was answering
        return Err(BackendError::not_found("Session not found."));
    }

    Ok(Json(SendMessageResponse {
        message: "Message sent.".to_string(),
        user_message,
        model_message,
    }))
}

/// Messages of a session; an unknown session has none
pub async fn list_messages(
    DbConn(mut conn): DbConn,
    Path(session_id): Path<String>,
) -> Result<Json<Vec<ChatMessage>>, BackendError> {
    let messages = db::get_messages(&mut conn, &session_id)
        .await?
        .unwrap_or_default();
    Ok(Json(messages))
}
