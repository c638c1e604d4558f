//! Post repository

use chrono::Utc;
use sqlx::SqlitePool;

use super::{CommentRepo, DbError, LikeRepo, Mutation, UserRepo};
use crate::models::{NewPost, Post, PostChanges, PostWithAssociations};

pub struct PostRepo<'a> {
    pool: &'a SqlitePool,
}

impl<'a> PostRepo<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn list(&self) -> Result<Vec<Post>, DbError> {
        let posts = sqlx::query_as::<_, Post>("SELECT * FROM Posts ORDER BY id")
            .fetch_all(self.pool)
            .await?;
        Ok(posts)
    }

    pub async fn get(&self, id: i64) -> Result<Option<Post>, DbError> {
        let post = sqlx::query_as::<_, Post>("SELECT * FROM Posts WHERE id = ?")
            .bind(id)
            .fetch_optional(self.pool)
            .await?;
        Ok(post)
    }

    /// Lookup with the owning user and the post's comments and likes
    /// attached. The projection is explicit: exactly these three relations,
    /// nothing reflective.
    pub async fn get_with_associations(
        &self,
        id: i64,
    ) -> Result<Option<PostWithAssociations>, DbError> {
        let Some(post) = self.get(id).await? else {
            return Ok(None);
        };

        let user = UserRepo::new(self.pool).get(post.user_id).await?;
        let comments = CommentRepo::new(self.pool).list_by_post(id).await?;
        let likes = LikeRepo::new(self.pool).list_by_post(id).await?;

        Ok(Some(PostWithAssociations {
            post,
            user,
            comments,
            likes,
        }))
    }

    /// Posts whose userId foreign key equals `user_id`.
    pub async fn list_by_user(&self, user_id: i64) -> Result<Vec<Post>, DbError> {
        let posts = sqlx::query_as::<_, Post>("SELECT * FROM Posts WHERE userId = ? ORDER BY id")
            .bind(user_id)
            .fetch_all(self.pool)
            .await?;
        Ok(posts)
    }

    pub async fn create(&self, new: NewPost) -> Result<Post, DbError> {
        let now = Utc::now();
        let post = sqlx::query_as::<_, Post>(
            r#"
            INSERT INTO Posts (userId, title, content, published, createdAt, updatedAt)
            VALUES (?, ?, ?, ?, ?, ?)
            RETURNING *
            "#,
        )
        .bind(new.user_id)
        .bind(&new.title)
        .bind(&new.content)
        .bind(new.published.unwrap_or(false))
        .bind(now)
        .bind(now)
        .fetch_one(self.pool)
        .await?;
        Ok(post)
    }

    pub async fn update(&self, id: i64, changes: PostChanges) -> Result<Mutation, DbError> {
        let result = sqlx::query(
            r#"
            UPDATE Posts SET
                userId = COALESCE(?, userId),
                title = COALESCE(?, title),
                content = COALESCE(?, content),
                published = COALESCE(?, published),
                updatedAt = ?
            WHERE id = ?
            "#,
        )
        .bind(changes.user_id)
        .bind(&changes.title)
        .bind(&changes.content)
        .bind(changes.published)
        .bind(Utc::now())
        .bind(id)
        .execute(self.pool)
        .await?;
        Ok(Mutation::from_rows_affected(result.rows_affected()))
    }

    pub async fn delete(&self, id: i64) -> Result<Mutation, DbError> {
        let result = sqlx::query("DELETE FROM Posts WHERE id = ?")
            .bind(id)
            .execute(self.pool)
            .await?;
        Ok(Mutation::from_rows_affected(result.rows_affected()))
    }
}
