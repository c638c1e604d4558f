//! Like entity and validation rules

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;

use super::post::Post;
use super::user::User;
use super::validation::{int_field, FieldError, Rules};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
#[sqlx(rename_all = "camelCase")]
pub struct Like {
    pub id: i64,
    pub post_id: i64,
    pub user_id: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A like with its owning post and user attached.
#[derive(Debug, Clone, Serialize)]
pub struct LikeWithAssociations {
    #[serde(flatten)]
    pub like: Like,
    #[serde(rename = "Post")]
    pub post: Option<Post>,
    #[serde(rename = "User")]
    pub user: Option<User>,
}

/// Validated input for like creation.
#[derive(Debug, Clone)]
pub struct NewLike {
    pub post_id: i64,
    pub user_id: i64,
}

/// Validated input for a keyed like update. Unset fields stay untouched.
#[derive(Debug, Clone, Default)]
pub struct LikeChanges {
    pub post_id: Option<i64>,
    pub user_id: Option<i64>,
}

fn like_rules(body: &Value) -> Result<(), Vec<FieldError>> {
    let mut rules = Rules::new(body);
    rules.require("postId", "postId is required");
    rules.numeric("postId", "postId should be numeric");
    rules.require("userId", "userId is required");
    rules.numeric("userId", "userId should be numeric");
    rules.finish()
}

pub fn validate_new_like(body: &Value) -> Result<NewLike, Vec<FieldError>> {
    like_rules(body)?;
    Ok(NewLike {
        post_id: int_field(body, "postId"),
        user_id: int_field(body, "userId"),
    })
}

pub fn validate_like_changes(body: &Value) -> Result<LikeChanges, Vec<FieldError>> {
    like_rules(body)?;
    Ok(LikeChanges {
        post_id: Some(int_field(body, "postId")),
        user_id: Some(int_field(body, "userId")),
    })
}
