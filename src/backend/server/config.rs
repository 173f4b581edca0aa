/**
 * Database Configuration
 *
 * Builds the SQLite connection pool from the connection-string secret and
 * applies the embedded migrations.
 *
 * # Error Handling
 *
 * [`load_database`] logs failures instead of returning them. The server then
 * starts without a pool and every database-backed route answers 500 until
 * it is restarted with a reachable database.
 */

use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};

/// Database configuration result
///
/// `None` if the database is not available.
pub type DatabaseConfig = Option<SqlitePool>;

/// Connect a pool of at most `max_connections` and run migrations
///
/// In-memory URLs (`sqlite::memory:`) get a single connection that is never
/// recycled, since each SQLite in-memory connection is its own database.
pub async fn connect_database(
    database_url: &str,
    max_connections: u32,
) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);

    let in_memory = database_url.contains(":memory:") || database_url.contains("mode=memory");
    let pool_options = if in_memory {
        SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
    } else {
        SqlitePoolOptions::new().max_connections(max_connections)
    };

    let pool = pool_options.connect_with(options).await?;
    sqlx::migrate!().run(&pool).await?;

    Ok(pool)
}

/// Load and initialize the database connection pool
///
/// # Returns
///
/// - `Some(SqlitePool)` if the database is connected and migrated
/// - `None` if connecting or migrating failed
pub async fn load_database(database_url: &str, max_connections: u32) -> DatabaseConfig {
    tracing::info!(max_connections, "Connecting to database...");

    match connect_database(database_url, max_connections).await {
        Ok(pool) => {
            tracing::info!("Database connection pool created and migrated");
            Some(pool)
        }
        Err(e) => {
            tracing::error!("Failed to set up database: {:?}", e);
            tracing::warn!("Database-backed routes will answer 500 until restart.");
            None
        }
    }
}
