//! Database connection pool management
//!
//! Uses sqlx SqlitePool with explicit connection limits. The pool is the
//! process-wide persistence handle: opened once at startup, closed on
//! shutdown, and passed by reference into each repository.

use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;

/// Default maximum connections for the pool.
/// Kept low for a single-process service.
const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// Create a SQLite connection pool.
///
/// # Arguments
///
/// * `database_url` - SQLite connection string, e.g. `sqlite://blogd.db?mode=rwc`
///
/// # Errors
///
/// Returns an error if the connection fails.
pub async fn create_pool(database_url: &str) -> Result<SqlitePool, sqlx::Error> {
    create_pool_with_options(database_url, DEFAULT_MAX_CONNECTIONS).await
}

/// Create a SQLite connection pool with custom options.
///
/// # Arguments
///
/// * `database_url` - SQLite connection string
/// * `max_connections` - Maximum number of connections in the pool
pub async fn create_pool_with_options(
    database_url: &str,
    max_connections: u32,
) -> Result<SqlitePool, sqlx::Error> {
    SqlitePoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await
}
