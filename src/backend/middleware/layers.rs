//! Router-wide tower layers.

use axum::http::HeaderValue;
use tower_http::classify::{ServerErrorsAsFailures, SharedClassifier};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::shared::AppConfig;

/// One `tracing` span per HTTP request, with status and latency logged on
/// completion
pub fn trace_layer() -> TraceLayer<SharedClassifier<ServerErrorsAsFailures>> {
    TraceLayer::new_for_http()
}

/// CORS policy from `CORS_ALLOWED_ORIGINS`
///
/// Without an allow-list (or with one that parses to nothing) any origin is
/// accepted, which suits local development of the web client.
pub fn cors_layer(config: &AppConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = config
        .cors_allowed_origins
        .as_deref()
        .unwrap_or_default()
        .split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .filter_map(|origin| origin.parse().ok())
        .collect();

    let cors = CorsLayer::new().allow_headers(Any).allow_methods(Any);
    if origins.is_empty() {
        cors.allow_origin(Any)
    } else {
        cors.allow_origin(origins)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{header, Request};
    use axum::{routing::get, Router};
    use tower::ServiceExt;

    async fn allowed_origin(config: &AppConfig, origin: &str) -> Option<HeaderValue> {
        let app = Router::new()
            .route("/", get(|| async { "ok" }))
            .layer(cors_layer(config));

        let request = Request::builder()
            .uri("/")
            .header(header::ORIGIN, origin)
            .body(Body::empty())
            .unwrap();
        let response = app.oneshot(request).await.unwrap();
        response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .cloned()
    }

    #[tokio::test]
    async fn test_any_origin_without_allow_list() {
        let config = AppConfig::default();
        assert_eq!(
            allowed_origin(&config, "https://app.example.com").await,
            Some(HeaderValue::from_static("*"))
        );
    }

    #[tokio::test]
    async fn test_allow_list_is_enforced() {
        let config = AppConfig {
            cors_allowed_origins: Some(" https://app.example.com , ,http://localhost:5173".to_string()),
            ..AppConfig::default()
        };

        assert_eq!(
            allowed_origin(&config, "http://localhost:5173").await,
            Some(HeaderValue::from_static("http://localhost:5173"))
        );
        assert_eq!(allowed_origin(&config, "https://evil.example.com").await, None);
    }
}
