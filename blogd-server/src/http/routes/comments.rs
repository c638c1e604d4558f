//! Comment endpoints

use axum::{extract::State, routing::get, Json, Router};

use crate::db::repos::{CommentRepo, Mutation};
use crate::http::error::ApiError;
use crate::http::extractors::{JsonBody, ValidId};
use crate::http::Envelope;
use crate::models::comment::{
    validate_comment_changes, validate_new_comment, Comment, CommentWithAssociations,
};
use crate::state::AppState;

/// GET /api/comments - list all comments
async fn list_comments(
    State(state): State<AppState>,
) -> Result<Json<Envelope<Vec<Comment>>>, ApiError> {
    let comments = CommentRepo::new(state.pool()).list().await?;
    Ok(Json(Envelope::ok(comments)))
}

/// GET /api/comments/{id} - single comment, 404 when absent
async fn get_comment(
    State(state): State<AppState>,
    ValidId(id): ValidId,
) -> Result<Json<Envelope<Comment>>, ApiError> {
    let comment = CommentRepo::new(state.pool())
        .get(id)
        .await?
        .ok_or(ApiError::NotFound)?;
    Ok(Json(Envelope::ok(comment)))
}

/// GET /api/comments/{id}/include - single comment with its post and user
async fn get_comment_with_associations(
    State(state): State<AppState>,
    ValidId(id): ValidId,
) -> Result<Json<Envelope<CommentWithAssociations>>, ApiError> {
    let comment = CommentRepo::new(state.pool())
        .get_with_associations(id)
        .await?
        .ok_or(ApiError::NotFound)?;
    Ok(Json(Envelope::ok(comment)))
}

/// GET /api/comments/post/{id} - comments of one post; empty list is a 200
async fn list_comments_by_post(
    State(state): State<AppState>,
    ValidId(id): ValidId,
) -> Result<Json<Envelope<Vec<Comment>>>, ApiError> {
    let comments = CommentRepo::new(state.pool()).list_by_post(id).await?;
    Ok(Json(Envelope::ok(comments)))
}

/// GET /api/comments/user/{id} - comments of one user; empty list is a 200
async fn list_comments_by_user(
    State(state): State<AppState>,
    ValidId(id): ValidId,
) -> Result<Json<Envelope<Vec<Comment>>>, ApiError> {
    let comments = CommentRepo::new(state.pool()).list_by_user(id).await?;
    Ok(Json(Envelope::ok(comments)))
}

/// POST /api/comments - create a comment
async fn create_comment(
    State(state): State<AppState>,
    JsonBody(body): JsonBody,
) -> Result<Json<Envelope<Comment>>, ApiError> {
    let new = validate_new_comment(&body)?;
    let comment = CommentRepo::new(state.pool()).create(new).await?;
    Ok(Json(Envelope::ok(comment)))
}

/// PUT /api/comments/{id} - update a comment, echoing the affected-row count
async fn update_comment(
    State(state): State<AppState>,
    ValidId(id): ValidId,
    JsonBody(body): JsonBody,
) -> Result<Json<Envelope<u64>>, ApiError> {
    let changes = validate_comment_changes(&body)?;
    match CommentRepo::new(state.pool()).update(id, changes).await? {
        Mutation::Applied(count) => Ok(Json(Envelope::ok(count))),
        Mutation::NotFound => Err(ApiError::NotFound),
    }
}

/// DELETE /api/comments/{id} - delete a comment, echoing the deleted-row count
async fn delete_comment(
    State(state): State<AppState>,
    ValidId(id): ValidId,
) -> Result<Json<Envelope<u64>>, ApiError> {
    match CommentRepo::new(state.pool()).delete(id).await? {
        Mutation::Applied(count) => Ok(Json(Envelope::ok(count))),
        Mutation::NotFound => Err(ApiError::NotFound),
    }
}

/// Comment routes
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_comments).post(create_comment))
        .route(
            "/{id}",
            get(get_comment).put(update_comment).delete(delete_comment),
        )
        .route("/{id}/include", get(get_comment_with_associations))
        .route("/post/{id}", get(list_comments_by_post))
        .route("/user/{id}", get(list_comments_by_user))
}
