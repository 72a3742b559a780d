//! Blog statistics service.

use std::sync::Arc;

use crate::domain::aggregate::{self, AuthorSummary};
use crate::domain::entities::Blog;
use crate::domain::repositories::BlogRepository;
use crate::error::AppError;

/// Aggregated statistics over the full blog collection.
///
/// The `Option` fields are `None` when no blogs exist, since picking a
/// favorite or a leading author is undefined over an empty collection.
#[derive(Debug, Clone)]
pub struct BlogStats {
    pub blog_count: usize,
    pub total_likes: i64,
    pub favorite_blog: Option<Blog>,
    pub most_blogs: Option<AuthorSummary>,
    pub most_likes: Option<AuthorSummary>,
}

/// Service computing summary statistics over all stored blog posts.
///
/// Fetches the collection once and runs the pure aggregations from
/// [`crate::domain::aggregate`] over the in-memory snapshot.
pub struct StatsService {
    repository: Arc<dyn BlogRepository>,
}

impl StatsService {
    /// Creates a new statistics service.
    pub fn new(repository: Arc<dyn BlogRepository>) -> Self {
        Self { repository }
    }

    /// Computes statistics over every stored blog post.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn blog_stats(&self) -> Result<BlogStats, AppError> {
        let blogs = self.repository.list().await?;

        Ok(BlogStats {
            blog_count: blogs.len(),
            total_likes: aggregate::total_likes(&blogs),
            favorite_blog: aggregate::favorite_blog(&blogs).ok().cloned(),
            most_blogs: aggregate::most_blogs(&blogs).ok(),
            most_likes: aggregate::most_likes(&blogs).ok(),
        })
    }
}
