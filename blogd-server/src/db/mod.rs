//! Database layer - connection pool, schema, and repositories
//!
//! # Design Principles
//!
//! - One `SqlitePool` created at startup and injected into every repository
//! - Repositories trust their typed inputs; validation happens before the call
//! - Rely on DB constraints for uniqueness, no check-then-insert

pub mod migrations;
pub mod pool;
pub mod repos;

pub use pool::create_pool;
pub use repos::*;

#[cfg(test)]
pub(crate) async fn test_pool() -> sqlx::SqlitePool {
    // A single connection keeps every test statement on the same in-memory DB.
    let pool = pool::create_pool_with_options("sqlite::memory:", 1)
        .await
        .expect("in-memory pool");
    migrations::run(&pool).await.expect("migrations");
    pool
}
