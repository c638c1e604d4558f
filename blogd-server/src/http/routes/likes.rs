//! Like endpoints
//!
//! Two quirks inherited from the API contract: like-create answers 201
//! (every other create answers 200), and the include route is shaped
//! `/include/{id}` instead of `/{id}/include`.

use axum::{extract::State, http::StatusCode, routing::get, Json, Router};

use crate::db::repos::{LikeRepo, Mutation};
use crate::http::error::ApiError;
use crate::http::extractors::{JsonBody, ValidId};
use crate::http::Envelope;
use crate::models::like::{
    validate_like_changes, validate_new_like, Like, LikeWithAssociations,
};
use crate::state::AppState;

/// GET /api/likes - list all likes
async fn list_likes(State(state): State<AppState>) -> Result<Json<Envelope<Vec<Like>>>, ApiError> {
    let likes = LikeRepo::new(state.pool()).list().await?;
    Ok(Json(Envelope::ok(likes)))
}

/// GET /api/likes/{id} - single like, 404 when absent
async fn get_like(
    State(state): State<AppState>,
    ValidId(id): ValidId,
) -> Result<Json<Envelope<Like>>, ApiError> {
    let like = LikeRepo::new(state.pool())
        .get(id)
        .await?
        .ok_or(ApiError::NotFound)?;
    Ok(Json(Envelope::ok(like)))
}

/// GET /api/likes/include/{id} - single like with its post and user
async fn get_like_with_associations(
    State(state): State<AppState>,
    ValidId(id): ValidId,
) -> Result<Json<Envelope<LikeWithAssociations>>, ApiError> {
    let like = LikeRepo::new(state.pool())
        .get_with_associations(id)
        .await?
        .ok_or(ApiError::NotFound)?;
    Ok(Json(Envelope::ok(like)))
}

/// GET /api/likes/post/{id} - likes of one post; empty list is a 200
async fn list_likes_by_post(
    State(state): State<AppState>,
    ValidId(id): ValidId,
) -> Result<Json<Envelope<Vec<Like>>>, ApiError> {
    let likes = LikeRepo::new(state.pool()).list_by_post(id).await?;
    Ok(Json(Envelope::ok(likes)))
}

/// GET /api/likes/user/{id} - likes of one user; empty list is a 200
async fn list_likes_by_user(
    State(state): State<AppState>,
    ValidId(id): ValidId,
) -> Result<Json<Envelope<Vec<Like>>>, ApiError> {
    let likes = LikeRepo::new(state.pool()).list_by_user(id).await?;
    Ok(Json(Envelope::ok(likes)))
}

/// POST /api/likes - create a like (201)
async fn create_like(
    State(state): State<AppState>,
    JsonBody(body): JsonBody,
) -> Result<(StatusCode, Json<Envelope<Like>>), ApiError> {
    let new = validate_new_like(&body)?;
    let like = LikeRepo::new(state.pool()).create(new).await?;
    Ok((StatusCode::CREATED, Json(Envelope::created(like))))
}

/// PUT /api/likes/{id} - update a like, echoing the affected-row count
async fn update_like(
    State(state): State<AppState>,
    ValidId(id): ValidId,
    JsonBody(body): JsonBody,
) -> Result<Json<Envelope<u64>>, ApiError> {
    let changes = validate_like_changes(&body)?;
    match LikeRepo::new(state.pool()).update(id, changes).await? {
        Mutation::Applied(count) => Ok(Json(Envelope::ok(count))),
        Mutation::NotFound => Err(ApiError::NotFound),
    }
}

/// DELETE /api/likes/{id} - delete a like, echoing the deleted-row count
async fn delete_like(
    State(state): State<AppState>,
    ValidId(id): ValidId,
) -> Result<Json<Envelope<u64>>, ApiError> {
    match LikeRepo::new(state.pool()).delete(id).await? {
        Mutation::Applied(count) => Ok(Json(Envelope::ok(count))),
        Mutation::NotFound => Err(ApiError::NotFound),
    }
}

/// Like routes
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_likes).post(create_like))
        .route("/{id}", get(get_like).put(update_like).delete(delete_like))
        .route("/include/{id}", get(get_like_with_associations))
        .route("/post/{id}", get(list_likes_by_post))
        .route("/user/{id}", get(list_likes_by_user))
}
