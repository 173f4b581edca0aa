/**
 * API Route Handlers
 *
 * Routes for subscriber management, the feedback and analytics sinks, and
 * the article feed.
 *
 * # Routes
 *
 * ## Users
 * - `POST /api/users` - Subscribe (or merge topics into an existing user)
 * - `GET /api/users/{user_id}` - Get user
 * - `PUT /api/users/{user_id}` - Replace topics and/or preferences
 * - `DELETE /api/users/{user_id}` - Delete user
 *
 * ## Sinks
 * - `POST /api/feedback` - Message feedback (201)
 * - `POST /api/analytics` - Analytics event (202)
 *
 * ## Articles
 * - `GET /api/articles` - Every article
 * - `GET /api/articles/{article_id}` - One article
 */

use axum::routing::{get, post};
use axum::Router;

use crate::backend::articles::{get_article, list_articles};
use crate::backend::feedback::{log_event, submit_feedback};
use crate::backend::server::state::AppState;
use crate::backend::users::{delete_user, get_user, subscribe_user, update_user};

/// Configure API routes
///
/// No route requires authentication.
pub fn configure_api_routes(router: Router<AppState>) -> Router<AppState> {
    router
        // User endpoints
        .route("/api/users", post(subscribe_user))
        .route(
            "/api/users/{user_id}",
            get(get_user).put(update_user).delete(delete_user),
        )
        // Write-only sinks
        .route("/api/feedback", post(submit_feedback))
        .route("/api/analytics", post(log_event))
        // Article feed
        .route("/api/articles", get(list_articles))
        .route("/api/articles/{article_id}", get(get_article))
}
