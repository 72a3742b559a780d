//! Repository trait for blog post data access.

use crate::domain::entities::{Blog, NewBlog, UpdateBlog};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for blog post CRUD operations.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgBlogRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BlogRepository: Send + Sync {
    /// Creates a new blog post.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn create(&self, new_blog: NewBlog) -> Result<Blog, AppError>;

    /// Lists every blog post, oldest first.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list(&self) -> Result<Vec<Blog>, AppError>;

    /// Finds a blog post by id.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(Blog))` if found
    /// - `Ok(None)` if not found
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_id(&self, id: i64) -> Result<Option<Blog>, AppError>;

    /// Replaces the title, author, url, and likes of an existing post.
    ///
    /// Returns `Ok(None)` if no post matches `id`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn update(&self, id: i64, update: UpdateBlog) -> Result<Option<Blog>, AppError>;

    /// Deletes a blog post.
    ///
    /// Returns `Ok(true)` if a row was removed, `Ok(false)` if no post
    /// matches `id`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn delete(&self, id: i64) -> Result<bool, AppError>;

    /// Counts stored blog posts.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn count(&self) -> Result<i64, AppError>;
}
