//! Application state shared across handlers

use sqlx::SqlitePool;

/// Cloned into every handler; `SqlitePool` is reference-counted internally,
/// so clones share the same connection pool.
#[derive(Clone)]
pub struct AppState {
    pool: SqlitePool,
}

impl AppState {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}
