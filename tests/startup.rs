//! Startup sequence tests
//!
//! These read secrets from the process environment, so they run serially.

use assert_matches::assert_matches;
use axum_test::TestServer;
use serde_json::json;
use serial_test::serial;
use up2d8::backend::secrets::SecretError;
use up2d8::backend::server::create_app;
use up2d8::backend::BackendError;
use up2d8::shared::AppConfig;

const SECRET_VARS: [(&str, &str); 5] = [
    ("COSMOS_DB_CONNECTION_STRING_UP2D8", "sqlite::memory:"),
    ("UP2D8_GEMINI_API_KEY", "gemini-key"),
    ("UP2D8_SMTP_KEY", "smtp-key"),
    ("GOOGLE_CLIENT_ID", "google-id"),
    ("GOOGLE_CLIENT_SECRET", "google-secret"),
];

fn set_secrets() {
    for (key, value) in SECRET_VARS {
        std::env::set_var(key, value);
    }
}

fn clear_secrets() {
    for (key, _) in SECRET_VARS {
        std::env::remove_var(key);
    }
}

#[tokio::test]
#[serial]
async fn test_starts_from_environment_secrets() {
    set_secrets();
    let app = create_app(AppConfig::default()).await;
    clear_secrets();

    let server = TestServer::new(app.unwrap()).unwrap();
    server.get("/").await.assert_json(&json!({"Hello": "World"}));

    let subscribed = server
        .post("/api/users")
        .json(&json!({"email": "boot@example.com", "topics": ["ai"]}))
        .await;
    subscribed.assert_status_ok();
}

#[tokio::test]
#[serial]
async fn test_missing_secret_aborts_startup() {
    set_secrets();
    std::env::remove_var("UP2D8_SMTP_KEY");
    let result = create_app(AppConfig::default()).await;
    clear_secrets();

    assert_matches!(result, Err(BackendError::Secret(SecretError::NotFound(_))));
}

#[tokio::test]
#[serial]
async fn test_unreachable_database_still_serves() {
    set_secrets();
    let dir = tempfile::tempdir().unwrap();
    let url = format!("sqlite://{}/no/such/dir/app.db", dir.path().display());
    std::env::set_var("COSMOS_DB_CONNECTION_STRING_UP2D8", &url);
    let app = create_app(AppConfig::default()).await;
    clear_secrets();

    let server = TestServer::new(app.unwrap()).unwrap();
    server.get("/").await.assert_status_ok();
    server
        .get("/api/users/anyone")
        .await
        .assert_json(&json!({"detail": "Failed to connect to the database"}));
}
