//! Schema migrations, run once at startup.
//!
//! Table and column names keep the original API's camelCase wire shape so
//! rows serialize without field mapping. Foreign key columns are plain
//! NOT NULL integers with no referential action: deleting a parent row
//! leaves its children orphaned, which is the documented behavior.

use sqlx::SqlitePool;

const SCHEMA: &[&str] = &[
    r#"
    CREATE TABLE IF NOT EXISTS Users (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL,
        email TEXT NOT NULL UNIQUE,
        password TEXT NOT NULL,
        createdAt TEXT NOT NULL,
        updatedAt TEXT NOT NULL
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS Posts (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        userId INTEGER NOT NULL,
        title TEXT NOT NULL,
        content TEXT NOT NULL,
        published INTEGER NOT NULL DEFAULT 0,
        createdAt TEXT NOT NULL,
        updatedAt TEXT NOT NULL
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS Comments (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        postId INTEGER NOT NULL,
        userId INTEGER NOT NULL,
        content TEXT NOT NULL,
        createdAt TEXT NOT NULL,
        updatedAt TEXT NOT NULL
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS Likes (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        postId INTEGER NOT NULL,
        userId INTEGER NOT NULL,
        createdAt TEXT NOT NULL,
        updatedAt TEXT NOT NULL
    )
    "#,
];

const INDEXES: &[&str] = &[
    "CREATE INDEX IF NOT EXISTS idx_posts_userId ON Posts(userId)",
    "CREATE INDEX IF NOT EXISTS idx_comments_postId ON Comments(postId)",
    "CREATE INDEX IF NOT EXISTS idx_comments_userId ON Comments(userId)",
    "CREATE INDEX IF NOT EXISTS idx_likes_postId ON Likes(postId)",
    "CREATE INDEX IF NOT EXISTS idx_likes_userId ON Likes(userId)",
];

/// Create tables and indexes if they don't exist. Idempotent.
pub async fn run(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    for ddl in SCHEMA.iter().chain(INDEXES) {
        sqlx::query(ddl).execute(pool).await?;
    }
    Ok(())
}
