//! PostgreSQL implementation of blog repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{Blog, NewBlog, UpdateBlog};
use crate::domain::repositories::BlogRepository;
use crate::error::AppError;

/// PostgreSQL repository for blog post storage and retrieval.
pub struct PgBlogRepository {
    pool: Arc<PgPool>,
}

impl PgBlogRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct BlogRow {
    id: i64,
    title: String,
    author: String,
    url: String,
    likes: i64,
    user_id: Option<i64>,
    created_at: DateTime<Utc>,
}

impl From<BlogRow> for Blog {
    fn from(r: BlogRow) -> Self {
        Blog::new(
            r.id, r.title, r.author, r.url, r.likes, r.user_id, r.created_at,
        )
    }
}

#[async_trait]
impl BlogRepository for PgBlogRepository {
    async fn create(&self, new_blog: NewBlog) -> Result<Blog, AppError> {
        let row = sqlx::query_as::<_, BlogRow>(
            r#"
            INSERT INTO blogs (title, author, url, likes, user_id)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, title, author, url, likes, user_id, created_at
            "#,
        )
        .bind(&new_blog.title)
        .bind(&new_blog.author)
        .bind(&new_blog.url)
        .bind(new_blog.likes)
        .bind(new_blog.user_id)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row.into())
    }

    async fn list(&self) -> Result<Vec<Blog>, AppError> {
        let rows = sqlx::query_as::<_, BlogRow>(
            r#"
            SELECT id, title, author, url, likes, user_id, created_at
            FROM blogs
            ORDER BY id
            "#,
        )
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Blog::from).collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Blog>, AppError> {
        let row = sqlx::query_as::<_, BlogRow>(
            r#"
            SELECT id, title, author, url, likes, user_id, created_at
            FROM blogs
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Blog::from))
    }

    async fn update(&self, id: i64, update: UpdateBlog) -> Result<Option<Blog>, AppError> {
        let row = sqlx::query_as::<_, BlogRow>(
            r#"
            UPDATE blogs
            SET title = $2, author = $3, url = $4, likes = $5
            WHERE id = $1
            RETURNING id, title, author, url, likes, user_id, created_at
            "#,
        )
        .bind(id)
        .bind(&update.title)
        .bind(&update.author)
        .bind(&update.url)
        .bind(update.likes)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Blog::from))
    }

    async fn delete(&self, id: i64) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM blogs WHERE id = $1")
            .bind(id)
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn count(&self) -> Result<i64, AppError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM blogs")
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(count)
    }
}
