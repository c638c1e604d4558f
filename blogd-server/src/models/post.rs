//! Post entity and validation rules

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;

use super::comment::Comment;
use super::like::Like;
use super::user::User;
use super::validation::{int_field, str_field, FieldError, Rules};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
#[sqlx(rename_all = "camelCase")]
pub struct Post {
    pub id: i64,
    pub user_id: i64,
    pub title: String,
    pub content: String,
    pub published: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A post with every directly related row attached. The owning user is
/// optional because deleting a user leaves its posts orphaned.
#[derive(Debug, Clone, Serialize)]
pub struct PostWithAssociations {
    #[serde(flatten)]
    pub post: Post,
    #[serde(rename = "User")]
    pub user: Option<User>,
    #[serde(rename = "Comments")]
    pub comments: Vec<Comment>,
    #[serde(rename = "Likes")]
    pub likes: Vec<Like>,
}

/// Validated input for post creation.
#[derive(Debug, Clone)]
pub struct NewPost {
    pub user_id: i64,
    pub title: String,
    pub content: String,
    pub published: Option<bool>,
}

/// Validated input for a keyed post update. Unset fields stay untouched.
#[derive(Debug, Clone, Default)]
pub struct PostChanges {
    pub user_id: Option<i64>,
    pub title: Option<String>,
    pub content: Option<String>,
    pub published: Option<bool>,
}

fn post_rules(body: &Value) -> Result<(), Vec<FieldError>> {
    let mut rules = Rules::new(body);
    rules.require("userId", "userId is required");
    rules.numeric("userId", "userId should be numeric");
    rules.require("title", "title is required");
    rules.require("content", "content is required");
    rules.finish()
}

pub fn validate_new_post(body: &Value) -> Result<NewPost, Vec<FieldError>> {
    post_rules(body)?;
    Ok(NewPost {
        user_id: int_field(body, "userId"),
        title: str_field(body, "title"),
        content: str_field(body, "content"),
        published: body.get("published").and_then(Value::as_bool),
    })
}

pub fn validate_post_changes(body: &Value) -> Result<PostChanges, Vec<FieldError>> {
    post_rules(body)?;
    Ok(PostChanges {
        user_id: Some(int_field(body, "userId")),
        title: Some(str_field(body, "title")),
        content: Some(str_field(body, "content")),
        published: body.get("published").and_then(Value::as_bool),
    })
}
