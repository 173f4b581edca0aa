/**
 * Application State Management
 *
 * This module defines the application state structure and implements
 * the necessary `FromRef` traits for Axum state extraction.
 *
 * # Architecture
 *
 * The `AppState` struct is built once at startup and never mutated. It holds:
 * - The database connection pool (optional; `None` when the database could
 *   not be reached at startup)
 * - The text generator used by the chat endpoints
 * - The application configuration
 *
 * Cloning is cheap: the pool and the other fields are reference counted.
 */

use std::sync::Arc;

use axum::extract::FromRef;
use sqlx::SqlitePool;

use crate::backend::ai::TextGenerator;
use crate::shared::AppConfig;

/// Application state shared by every handler
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool
    ///
    /// This is `None` if the database could not be reached at startup.
    /// Handlers never touch it directly; they check out a connection through
    /// the `DbConn` extractor, which answers 500 when it is missing.
    pub db_pool: Option<SqlitePool>,

    /// Text generator behind the chat endpoints
    pub generator: Arc<dyn TextGenerator>,

    /// Configuration loaded at startup
    pub config: Arc<AppConfig>,
}

impl AppState {
    pub fn new(
        db_pool: Option<SqlitePool>,
        generator: Arc<dyn TextGenerator>,
        config: AppConfig,
    ) -> Self {
        Self {
            db_pool,
            generator,
            config: Arc::new(config),
        }
    }
}

/// Implement FromRef for the text generator
///
/// This allows handlers to take `State<Arc<dyn TextGenerator>>` directly.
impl FromRef<AppState> for Arc<dyn TextGenerator> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.generator.clone()
    }
}

/// Implement FromRef for Option<SqlitePool>
impl FromRef<AppState> for Option<SqlitePool> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.db_pool.clone()
    }
}
