//! DTOs for blog post endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::Blog;

/// Request to create a new blog post.
///
/// `likes` is optional and defaults to 0, matching the behavior of
/// clients that submit fresh posts without a like count.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateBlogRequest {
    #[validate(length(min = 1, message = "title must not be empty"))]
    pub title: String,

    #[validate(length(min = 1, message = "author must not be empty"))]
    pub author: String,

    #[validate(length(min = 1, message = "url must not be empty"))]
    pub url: String,

    #[validate(range(min = 0, message = "likes must not be negative"))]
    pub likes: Option<i64>,
}

/// Request to fully update an existing blog post.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateBlogRequest {
    #[validate(length(min = 1, message = "title must not be empty"))]
    pub title: String,

    #[validate(length(min = 1, message = "author must not be empty"))]
    pub author: String,

    #[validate(length(min = 1, message = "url must not be empty"))]
    pub url: String,

    #[validate(range(min = 0, message = "likes must not be negative"))]
    pub likes: i64,
}

/// JSON representation of a blog post.
#[derive(Debug, Serialize)]
pub struct BlogResponse {
    pub id: i64,
    pub title: String,
    pub author: String,
    pub url: String,
    pub likes: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<i64>,
    pub created_at: DateTime<Utc>,
}

impl From<Blog> for BlogResponse {
    fn from(blog: Blog) -> Self {
        Self {
            id: blog.id,
            title: blog.title,
            author: blog.author,
            url: blog.url,
            likes: blog.likes,
            user_id: blog.user_id,
            created_at: blog.created_at,
        }
    }
}
