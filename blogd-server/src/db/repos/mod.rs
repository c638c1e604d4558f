//! Repository implementations for database access
//!
//! Each repository follows these patterns:
//! - Borrows the shared pool (`Repo::new(&pool)`)
//! - Single-row lookups use `fetch_optional`, never error on absence
//! - Keyed writes report a tagged `Mutation` outcome instead of a bare count
//! - Association loading is an explicit per-entity projection

pub mod comments;
pub mod likes;
pub mod posts;
pub mod users;

pub use comments::CommentRepo;
pub use likes::LikeRepo;
pub use posts::PostRepo;
pub use users::UserRepo;

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),
}

/// Outcome of a keyed update or delete.
///
/// `Applied` carries the affected-row count so the response can echo it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mutation {
    Applied(u64),
    NotFound,
}

impl Mutation {
    pub(crate) fn from_rows_affected(count: u64) -> Self {
        if count == 0 {
            Self::NotFound
        } else {
            Self::Applied(count)
        }
    }
}
