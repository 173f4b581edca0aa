/**
 * Router Configuration
 *
 * This module provides the main router creation function that combines
 * all route configurations into a single Axum router.
 *
 * # Route Order
 *
 * 1. Root liveness route
 * 2. Chat routes (one-shot chat, sessions)
 * 3. API routes (users, feedback, analytics, articles)
 * 4. Fallback handlers (JSON 404 for unknown paths, JSON 405 for a wrong
 *    method on a known path)
 *
 * CORS and request tracing wrap every route, the fallback included.
 */

use axum::{http::StatusCode, routing::get, Json, Router};
use serde_json::{json, Value};
use tower::ServiceBuilder;

use crate::backend::error::BackendError;
use crate::backend::middleware::{cors_layer, trace_layer};
use crate::backend::routes::api_routes::configure_api_routes;
use crate::backend::routes::chat_routes::configure_chat_routes;
use crate::backend::server::state::AppState;

/// Create the Axum router with all routes configured
///
/// # Arguments
///
/// * `app_state` - Shared state: database pool, text generator, configuration
///
/// # Returns
///
/// Configured Axum Router ready to serve requests
pub fn create_router(app_state: AppState) -> Router<()> {
    let cors = cors_layer(&app_state.config);

    let router = Router::new().route("/", get(root));

    let router = configure_chat_routes(router);
    let router = configure_api_routes(router);

    // Fallback handlers for 404 and 405
    let router = router
        .fallback(|| async { BackendError::not_found("Not Found") })
        .method_not_allowed_fallback(|| async {
            BackendError::handler(StatusCode::METHOD_NOT_ALLOWED, "Method Not Allowed")
        });

    router
        .layer(ServiceBuilder::new().layer(trace_layer()).layer(cors))
        .with_state(app_state)
}

/// Liveness probe
async fn root() -> Json<Value> {
    Json(json!({ "Hello": "World" }))
}
