//! DTOs for the blog statistics endpoint.

use serde::Serialize;

use crate::api::dto::blog::BlogResponse;
use crate::application::services::BlogStats;
use crate::domain::aggregate::AuthorSummary;

/// Aggregated blog statistics.
///
/// The `Option` fields serialize as `null` when no blogs exist.
#[derive(Debug, Serialize)]
pub struct StatsResponse {
    pub blog_count: usize,
    pub total_likes: i64,
    pub favorite_blog: Option<BlogResponse>,
    pub most_blogs: Option<AuthorSummary>,
    pub most_likes: Option<AuthorSummary>,
}

impl From<BlogStats> for StatsResponse {
    fn from(stats: BlogStats) -> Self {
        Self {
            blog_count: stats.blog_count,
            total_likes: stats.total_likes,
            favorite_blog: stats.favorite_blog.map(BlogResponse::from),
            most_blogs: stats.most_blogs,
            most_likes: stats.most_likes,
        }
    }
}
