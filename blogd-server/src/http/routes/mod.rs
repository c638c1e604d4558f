//! Per-entity route modules, nested under `/api/...` by `build_router`.

pub mod comments;
pub mod health;
pub mod likes;
pub mod posts;
pub mod users;

use super::error::ApiError;

/// Fallback for unmatched paths: the not-found marker flows through the
/// catch-all stage of the error chain, status 404 with the generic body.
pub async fn not_found() -> ApiError {
    ApiError::RouteMissing
}
