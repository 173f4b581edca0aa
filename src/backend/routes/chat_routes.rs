/**
 * Chat Route Handlers
 *
 * Routes for talking to the model, with or without a stored session.
 *
 * # Routes
 *
 * - `POST /api/chat` - One-shot prompt
 * - `POST /api/sessions` - Create a session
 * - `POST /api/sessions/{session_id}/messages` - Send a message in a session
 * - `GET /api/sessions/{session_id}/messages` - Session history
 * - `GET /api/users/{user_id}/sessions` - Sessions of a user
 */

use axum::routing::{get, post};
use axum::Router;

use crate::backend::chat::{chat, create_session, list_messages, list_sessions, send_message};
use crate::backend::server::state::AppState;

/// Configure chat routes
pub fn configure_chat_routes(router: Router<AppState>) -> Router<AppState> {
    router
        .route("/api/chat", post(chat))
        .route("/api/sessions", post(create_session))
        .route(
            "/api/sessions/{session_id}/messages",
            post(send_message).get(list_messages),
        )
        .route("/api/users/{user_id}/sessions", get(list_sessions))
}
