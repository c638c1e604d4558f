//! Comment entity and validation rules

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;

use super::post::Post;
use super::user::User;
use super::validation::{int_field, str_field, FieldError, Rules};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
#[sqlx(rename_all = "camelCase")]
pub struct Comment {
    pub id: i64,
    pub post_id: i64,
    pub user_id: i64,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A comment with its owning post and user attached. Either parent may be
/// absent when it was deleted after the comment was written.
#[derive(Debug, Clone, Serialize)]
pub struct CommentWithAssociations {
    #[serde(flatten)]
    pub comment: Comment,
    #[serde(rename = "Post")]
    pub post: Option<Post>,
    #[serde(rename = "User")]
    pub user: Option<User>,
}

/// Validated input for comment creation.
#[derive(Debug, Clone)]
pub struct NewComment {
    pub post_id: i64,
    pub user_id: i64,
    pub content: String,
}

/// Validated input for a keyed comment update. Unset fields stay untouched.
#[derive(Debug, Clone, Default)]
pub struct CommentChanges {
    pub post_id: Option<i64>,
    pub user_id: Option<i64>,
    pub content: Option<String>,
}

fn comment_rules(body: &Value) -> Result<(), Vec<FieldError>> {
    let mut rules = Rules::new(body);
    rules.require("postId", "postId is required");
    rules.numeric("postId", "postId should be a number");
    rules.require("userId", "userId is required");
    rules.numeric("userId", "userId should be a number");
    rules.require("content", "content is required");
    rules.finish()
}

pub fn validate_new_comment(body: &Value) -> Result<NewComment, Vec<FieldError>> {
    comment_rules(body)?;
    Ok(NewComment {
        post_id: int_field(body, "postId"),
        user_id: int_field(body, "userId"),
        content: str_field(body, "content"),
    })
}

pub fn validate_comment_changes(body: &Value) -> Result<CommentChanges, Vec<FieldError>> {
    comment_rules(body)?;
    Ok(CommentChanges {
        post_id: Some(int_field(body, "postId")),
        user_id: Some(int_field(body, "userId")),
        content: Some(str_field(body, "content")),
    })
}
