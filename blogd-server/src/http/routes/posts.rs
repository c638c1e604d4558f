//! Post endpoints

use axum::{extract::State, routing::get, Json, Router};

use crate::db::repos::{Mutation, PostRepo};
use crate::http::error::ApiError;
use crate::http::extractors::{JsonBody, ValidId};
use crate::http::Envelope;
use crate::models::post::{
    validate_new_post, validate_post_changes, Post, PostWithAssociations,
};
use crate::state::AppState;

/// GET /api/posts - list all posts
async fn list_posts(State(state): State<AppState>) -> Result<Json<Envelope<Vec<Post>>>, ApiError> {
    let posts = PostRepo::new(state.pool()).list().await?;
    Ok(Json(Envelope::ok(posts)))
}

/// GET /api/posts/{id} - single post, 404 when absent
async fn get_post(
    State(state): State<AppState>,
    ValidId(id): ValidId,
) -> Result<Json<Envelope<Post>>, ApiError> {
    let post = PostRepo::new(state.pool())
        .get(id)
        .await?
        .ok_or(ApiError::NotFound)?;
    Ok(Json(Envelope::ok(post)))
}

/// GET /api/posts/{id}/include - single post with user, comments, and likes
async fn get_post_with_associations(
    State(state): State<AppState>,
    ValidId(id): ValidId,
) -> Result<Json<Envelope<PostWithAssociations>>, ApiError> {
    let post = PostRepo::new(state.pool())
        .get_with_associations(id)
        .await?
        .ok_or(ApiError::NotFound)?;
    Ok(Json(Envelope::ok(post)))
}

/// GET /api/posts/user/{id} - posts of one user; empty list is a 200
async fn list_posts_by_user(
    State(state): State<AppState>,
    ValidId(id): ValidId,
) -> Result<Json<Envelope<Vec<Post>>>, ApiError> {
    let posts = PostRepo::new(state.pool()).list_by_user(id).await?;
    Ok(Json(Envelope::ok(posts)))
}

/// POST /api/posts - create a post
async fn create_post(
    State(state): State<AppState>,
    JsonBody(body): JsonBody,
) -> Result<Json<Envelope<Post>>, ApiError> {
    let new = validate_new_post(&body)?;
    let post = PostRepo::new(state.pool()).create(new).await?;
    Ok(Json(Envelope::ok(post)))
}

/// PUT /api/posts/{id} - update a post, echoing the affected-row count
async fn update_post(
    State(state): State<AppState>,
    ValidId(id): ValidId,
    JsonBody(body): JsonBody,
) -> Result<Json<Envelope<u64>>, ApiError> {
    let changes = validate_post_changes(&body)?;
    match PostRepo::new(state.pool()).update(id, changes).await? {
        Mutation::Applied(count) => Ok(Json(Envelope::ok(count))),
        Mutation::NotFound => Err(ApiError::NotFound),
    }
}

/// DELETE /api/posts/{id} - delete a post, echoing the deleted-row count
async fn delete_post(
    State(state): State<AppState>,
    ValidId(id): ValidId,
) -> Result<Json<Envelope<u64>>, ApiError> {
    match PostRepo::new(state.pool()).delete(id).await? {
        Mutation::Applied(count) => Ok(Json(Envelope::ok(count))),
        Mutation::NotFound => Err(ApiError::NotFound),
    }
}

/// Post routes
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_posts).post(create_post))
        .route("/{id}", get(get_post).put(update_post).delete(delete_post))
        .route("/{id}/include", get(get_post_with_associations))
        .route("/user/{id}", get(list_posts_by_user))
}
