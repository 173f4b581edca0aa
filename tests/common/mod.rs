//! Common test utilities and helpers
//!
//! This module provides shared utilities for the integration tests:
//! - In-memory database pools
//! - A scripted text generator standing in for Gemini
//! - A `TestServer` wired with the real router

#![allow(dead_code)]

pub mod generator;

use std::sync::Arc;

use axum_test::TestServer;
use sqlx::SqlitePool;
use up2d8::backend::ai::TextGenerator;
use up2d8::backend::routes::create_router;
use up2d8::backend::server::config::connect_database;
use up2d8::backend::server::AppState;
use up2d8::shared::AppConfig;

pub use generator::{GatedGenerator, ScriptedGenerator};

/// Fresh, migrated in-memory database
pub async fn test_pool() -> SqlitePool {
    connect_database("sqlite::memory:", 1)
        .await
        .expect("Failed to create in-memory database")
}

/// Router over a fresh database and `generator`
///
/// The returned pool is the one the server uses, for seeding and checking
/// rows directly.
pub async fn test_server_with(generator: Arc<dyn TextGenerator>) -> (TestServer, SqlitePool) {
    let pool = test_pool().await;
    let server = test_server_on(pool.clone(), generator);
    (server, pool)
}

/// Router over an existing pool and `generator`
pub fn test_server_on(pool: SqlitePool, generator: Arc<dyn TextGenerator>) -> TestServer {
    let state = AppState::new(Some(pool), generator, AppConfig::default());
    TestServer::new(create_router(state)).expect("Failed to start test server")
}

/// Router whose generator always answers "Scripted reply."
pub async fn test_server() -> (TestServer, SqlitePool) {
    test_server_with(Arc::new(ScriptedGenerator::replying("Scripted reply."))).await
}

/// Router started without a database
pub fn test_server_without_database() -> TestServer {
    let generator = Arc::new(ScriptedGenerator::replying("unused"));
    let state = AppState::new(None, generator, AppConfig::default());
    TestServer::new(create_router(state)).expect("Failed to start test server")
}
