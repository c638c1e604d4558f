//! User endpoints

use axum::{extract::State, routing::get, Json, Router};

use crate::db::repos::{Mutation, UserRepo};
use crate::http::error::ApiError;
use crate::http::extractors::{JsonBody, ValidId};
use crate::http::Envelope;
use crate::models::user::{validate_new_user, validate_user_changes, User};
use crate::state::AppState;

/// GET /api/users - list all users
async fn list_users(State(state): State<AppState>) -> Result<Json<Envelope<Vec<User>>>, ApiError> {
    let users = UserRepo::new(state.pool()).list().await?;
    Ok(Json(Envelope::ok(users)))
}

/// GET /api/users/{id} - single user, 404 when absent
async fn get_user(
    State(state): State<AppState>,
    ValidId(id): ValidId,
) -> Result<Json<Envelope<User>>, ApiError> {
    let user = UserRepo::new(state.pool())
        .get(id)
        .await?
        .ok_or(ApiError::NotFound)?;
    Ok(Json(Envelope::ok(user)))
}

/// POST /api/users - create a user
async fn create_user(
    State(state): State<AppState>,
    JsonBody(body): JsonBody,
) -> Result<Json<Envelope<User>>, ApiError> {
    let new = validate_new_user(&body)?;
    let user = UserRepo::new(state.pool()).create(new).await?;
    Ok(Json(Envelope::ok(user)))
}

/// PUT /api/users/{id} - update a user, echoing the affected-row count
async fn update_user(
    State(state): State<AppState>,
    ValidId(id): ValidId,
    JsonBody(body): JsonBody,
) -> Result<Json<Envelope<u64>>, ApiError> {
    let changes = validate_user_changes(&body)?;
    match UserRepo::new(state.pool()).update(id, changes).await? {
        Mutation::Applied(count) => Ok(Json(Envelope::ok(count))),
        Mutation::NotFound => Err(ApiError::NotFound),
    }
}

/// DELETE /api/users/{id} - delete a user, echoing the deleted-row count
async fn delete_user(
    State(state): State<AppState>,
    ValidId(id): ValidId,
) -> Result<Json<Envelope<u64>>, ApiError> {
    match UserRepo::new(state.pool()).delete(id).await? {
        Mutation::Applied(count) => Ok(Json(Envelope::ok(count))),
        Mutation::NotFound => Err(ApiError::NotFound),
    }
}

/// User routes
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_users).post(create_user))
        .route("/{id}", get(get_user).put(update_user).delete(delete_user))
}
