//! Comment repository

use chrono::Utc;
use sqlx::SqlitePool;

use super::{DbError, Mutation, PostRepo, UserRepo};
use crate::models::{Comment, CommentChanges, CommentWithAssociations, NewComment};

pub struct CommentRepo<'a> {
    pool: &'a SqlitePool,
}

impl<'a> CommentRepo<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn list(&self) -> Result<Vec<Comment>, DbError> {
        let comments = sqlx::query_as::<_, Comment>("SELECT * FROM Comments ORDER BY id")
            .fetch_all(self.pool)
            .await?;
        Ok(comments)
    }

    pub async fn get(&self, id: i64) -> Result<Option<Comment>, DbError> {
        let comment = sqlx::query_as::<_, Comment>("SELECT * FROM Comments WHERE id = ?")
            .bind(id)
            .fetch_optional(self.pool)
            .await?;
        Ok(comment)
    }

    /// Lookup with the owning post and user attached.
    pub async fn get_with_associations(
        &self,
        id: i64,
    ) -> Result<Option<CommentWithAssociations>, DbError> {
        let Some(comment) = self.get(id).await? else {
            return Ok(None);
        };

        let post = PostRepo::new(self.pool).get(comment.post_id).await?;
        let user = UserRepo::new(self.pool).get(comment.user_id).await?;

        Ok(Some(CommentWithAssociations {
            comment,
            post,
            user,
        }))
    }

    pub async fn list_by_post(&self, post_id: i64) -> Result<Vec<Comment>, DbError> {
        let comments =
            sqlx::query_as::<_, Comment>("SELECT * FROM Comments WHERE postId = ? ORDER BY id")
                .bind(post_id)
                .fetch_all(self.pool)
                .await?;
        Ok(comments)
    }

    pub async fn list_by_user(&self, user_id: i64) -> Result<Vec<Comment>, DbError> {
        let comments =
            sqlx::query_as::<_, Comment>("SELECT * FROM Comments WHERE userId = ? ORDER BY id")
                .bind(user_id)
                .fetch_all(self.pool)
                .await?;
        Ok(comments)
    }

    pub async fn create(&self, new: NewComment) -> Result<Comment, DbError> {
        let now = Utc::now();
        let comment = sqlx::query_as::<_, Comment>(
            r#"
            INSERT INTO Comments (postId, userId, content, createdAt, updatedAt)
            VALUES (?, ?, ?, ?, ?)
            RETURNING *
            "#,
        )
        .bind(new.post_id)
        .bind(new.user_id)
        .bind(&new.content)
        .bind(now)
        .bind(now)
        .fetch_one(self.pool)
        .await?;
        Ok(comment)
    }

    pub async fn update(&self, id: i64, changes: CommentChanges) -> Result<Mutation, DbError> {
        let result = sqlx::query(
            r#"
            UPDATE Comments SET
                postId = COALESCE(?, postId),
                userId = COALESCE(?, userId),
                content = COALESCE(?, content),
                updatedAt = ?
            WHERE id = ?
            "#,
        )
        .bind(changes.post_id)
        .bind(changes.user_id)
        .bind(&changes.content)
        .bind(Utc::now())
        .bind(id)
        .execute(self.pool)
        .await?;
        Ok(Mutation::from_rows_affected(result.rows_affected()))
    }

    pub async fn delete(&self, id: i64) -> Result<Mutation, DbError> {
        let result = sqlx::query("DELETE FROM Comments WHERE id = ?")
            .bind(id)
            .execute(self.pool)
            .await?;
        Ok(Mutation::from_rows_affected(result.rows_affected()))
    }
}
