//! User entity and validation rules

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;

use super::validation::{str_field, FieldError, Rules};

/// A user row. The password is stored and returned verbatim; there is no
/// authentication layer in this service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
#[sqlx(rename_all = "camelCase")]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub password: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Validated input for user creation.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Validated input for a keyed user update. Unset fields stay untouched.
#[derive(Debug, Clone, Default)]
pub struct UserChanges {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

fn user_rules(body: &Value) -> Result<(), Vec<FieldError>> {
    let mut rules = Rules::new(body);
    rules.require("name", "name is required");
    rules.require("email", "email is required");
    rules.email("email", "Invalid email");
    rules.length(
        "password",
        6,
        50,
        "The minimum password length is 6 characters, max 50",
    );
    rules.finish()
}

/// Validate a user-create body, yielding the typed insert input.
pub fn validate_new_user(body: &Value) -> Result<NewUser, Vec<FieldError>> {
    user_rules(body)?;
    Ok(NewUser {
        name: str_field(body, "name"),
        email: str_field(body, "email"),
        password: str_field(body, "password"),
    })
}

/// Validate a user-update body. The update route requires the full field
/// set, so every change is populated on success.
pub fn validate_user_changes(body: &Value) -> Result<UserChanges, Vec<FieldError>> {
    user_rules(body)?;
    Ok(UserChanges {
        name: Some(str_field(body, "name")),
        email: Some(str_field(body, "email")),
        password: Some(str_field(body, "password")),
    })
}
