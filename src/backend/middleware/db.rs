/**
 * Database Connection Extractor
 *
 * `DbConn` is the per-request, scoped borrow of a pooled connection. Taking it
 * as a handler argument checks one connection out of the pool before the
 * handler runs; the connection goes back to the pool when the handler
 * returns, errors, or is cancelled, because the guard is dropped on every
 * one of those paths.
 */

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use sqlx::pool::PoolConnection;
use sqlx::{Sqlite, SqlitePool};

use crate::backend::error::BackendError;
use crate::backend::server::state::AppState;

/// A pooled SQLite connection held for the duration of one request
///
/// Derefs to `SqliteConnection`, so `&mut conn` can be passed straight to the
/// repository functions.
pub struct DbConn(pub PoolConnection<Sqlite>);

impl FromRequestParts<AppState> for DbConn {
    type Rejection = BackendError;

    async fn from_request_parts(
        _parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let conn = acquire(state.db_pool.as_ref()).await?;
        Ok(DbConn(conn))
    }
}

/// Check out one connection from `pool`
///
/// For handlers that must not hold a connection for their whole run, such
/// as one that waits on the model between two queries.
pub async fn acquire(pool: Option<&SqlitePool>) -> Result<PoolConnection<Sqlite>, BackendError> {
    let pool = pool.ok_or_else(|| {
        tracing::error!("Database not configured");
        BackendError::ServiceUnavailable
    })?;

    pool.acquire().await.map_err(|e| {
        tracing::error!("Failed to check out a database connection: {:?}", e);
        BackendError::ServiceUnavailable
    })
}
