//! User repository
//!
//! Email uniqueness is enforced by the UNIQUE column constraint; a duplicate
//! insert surfaces as `DbError::Sqlx`, not a distinct variant.

use chrono::Utc;
use sqlx::SqlitePool;

use super::{DbError, Mutation};
use crate::models::{NewUser, User, UserChanges};

pub struct UserRepo<'a> {
    pool: &'a SqlitePool,
}

impl<'a> UserRepo<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Every user, unfiltered.
    pub async fn list(&self) -> Result<Vec<User>, DbError> {
        let users = sqlx::query_as::<_, User>("SELECT * FROM Users ORDER BY id")
            .fetch_all(self.pool)
            .await?;
        Ok(users)
    }

    /// Single-row lookup by primary key.
    pub async fn get(&self, id: i64) -> Result<Option<User>, DbError> {
        let user = sqlx::query_as::<_, User>("SELECT * FROM Users WHERE id = ?")
            .bind(id)
            .fetch_optional(self.pool)
            .await?;
        Ok(user)
    }

    /// Insert a new user, returning the stored row.
    pub async fn create(&self, new: NewUser) -> Result<User, DbError> {
        let now = Utc::now();
        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO Users (name, email, password, createdAt, updatedAt)
            VALUES (?, ?, ?, ?, ?)
            RETURNING *
            "#,
        )
        .bind(&new.name)
        .bind(&new.email)
        .bind(&new.password)
        .bind(now)
        .bind(now)
        .fetch_one(self.pool)
        .await?;
        Ok(user)
    }

    /// Partial update keyed by id. Only supplied fields change.
    pub async fn update(&self, id: i64, changes: UserChanges) -> Result<Mutation, DbError> {
        let result = sqlx::query(
            r#"
            UPDATE Users SET
                name = COALESCE(?, name),
                email = COALESCE(?, email),
                password = COALESCE(?, password),
                updatedAt = ?
            WHERE id = ?
            "#,
        )
        .bind(&changes.name)
        .bind(&changes.email)
        .bind(&changes.password)
        .bind(Utc::now())
        .bind(id)
        .execute(self.pool)
        .await?;
        Ok(Mutation::from_rows_affected(result.rows_affected()))
    }

    /// Hard delete keyed by id.
    pub async fn delete(&self, id: i64) -> Result<Mutation, DbError> {
        let result = sqlx::query("DELETE FROM Users WHERE id = ?")
            .bind(id)
            .execute(self.pool)
            .await?;
        Ok(Mutation::from_rows_affected(result.rows_affected()))
    }
}
