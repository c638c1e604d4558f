//! Like repository

use chrono::Utc;
use sqlx::SqlitePool;

use super::{DbError, Mutation, PostRepo, UserRepo};
use crate::models::{Like, LikeChanges, LikeWithAssociations, NewLike};

pub struct LikeRepo<'a> {
    pool: &'a SqlitePool,
}

impl<'a> LikeRepo<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn list(&self) -> Result<Vec<Like>, DbError> {
        let likes = sqlx::query_as::<_, Like>("SELECT * FROM Likes ORDER BY id")
            .fetch_all(self.pool)
            .await?;
        Ok(likes)
    }

    pub async fn get(&self, id: i64) -> Result<Option<Like>, DbError> {
        let like = sqlx::query_as::<_, Like>("SELECT * FROM Likes WHERE id = ?")
            .bind(id)
            .fetch_optional(self.pool)
            .await?;
        Ok(like)
    }

    /// Lookup with the owning post and user attached.
    pub async fn get_with_associations(
        &self,
        id: i64,
    ) -> Result<Option<LikeWithAssociations>, DbError> {
        let Some(like) = self.get(id).await? else {
            return Ok(None);
        };

        let post = PostRepo::new(self.pool).get(like.post_id).await?;
        let user = UserRepo::new(self.pool).get(like.user_id).await?;

        Ok(Some(LikeWithAssociations { like, post, user }))
    }

    pub async fn list_by_post(&self, post_id: i64) -> Result<Vec<Like>, DbError> {
        let likes = sqlx::query_as::<_, Like>("SELECT * FROM Likes WHERE postId = ? ORDER BY id")
            .bind(post_id)
            .fetch_all(self.pool)
            .await?;
        Ok(likes)
    }

    pub async fn list_by_user(&self, user_id: i64) -> Result<Vec<Like>, DbError> {
        let likes = sqlx::query_as::<_, Like>("SELECT * FROM Likes WHERE userId = ? ORDER BY id")
            .bind(user_id)
            .fetch_all(self.pool)
            .await?;
        Ok(likes)
    }

    pub async fn create(&self, new: NewLike) -> Result<Like, DbError> {
        let now = Utc::now();
        let like = sqlx::query_as::<_, Like>(
            r#"
            INSERT INTO Likes (postId, userId, createdAt, updatedAt)
            VALUES (?, ?, ?, ?)
            RETURNING *
            "#,
        )
        .bind(new.post_id)
        .bind(new.user_id)
        .bind(now)
        .bind(now)
        .fetch_one(self.pool)
        .await?;
        Ok(like)
    }

    pub async fn update(&self, id: i64, changes: LikeChanges) -> Result<Mutation, DbError> {
        let result = sqlx::query(
            r#"
            UPDATE Likes SET
                postId = COALESCE(?, postId),
                userId = COALESCE(?, userId),
                updatedAt = ?
            WHERE id = ?
            "#,
        )
        .bind(changes.post_id)
        .bind(changes.user_id)
        .bind(Utc::now())
        .bind(id)
        .execute(self.pool)
        .await?;
        Ok(Mutation::from_rows_affected(result.rows_affected()))
    }

    pub async fn delete(&self, id: i64) -> Result<Mutation, DbError> {
        let result = sqlx::query("DELETE FROM Likes WHERE id = ?")
            .bind(id)
            .execute(self.pool)
            .await?;
        Ok(Mutation::from_rows_affected(result.rows_affected()))
    }
}
