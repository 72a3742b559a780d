//! Blog entity representing a single authored post.

use chrono::{DateTime, Utc};

/// A blog post with its like count and optional creator reference.
///
/// `user_id` points at the account that created the post through the API.
/// It is `None` for posts that predate authenticated creation.
#[derive(Debug, Clone, PartialEq)]
pub struct Blog {
    pub id: i64,
    pub title: String,
    pub author: String,
    pub url: String,
    pub likes: i64,
    pub user_id: Option<i64>,
    pub created_at: DateTime<Utc>,
}

impl Blog {
    /// Creates a new Blog instance.
    pub fn new(
        id: i64,
        title: String,
        author: String,
        url: String,
        likes: i64,
        user_id: Option<i64>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            title,
            author,
            url,
            likes,
            user_id,
            created_at,
        }
    }
}

/// Input data for creating a new blog post.
#[derive(Debug, Clone)]
pub struct NewBlog {
    pub title: String,
    pub author: String,
    pub url: String,
    pub likes: i64,
    pub user_id: Option<i64>,
}

/// Full replacement data for an existing blog post.
///
/// PUT semantics: every field is written, there is no partial update.
#[derive(Debug, Clone)]
pub struct UpdateBlog {
    pub title: String,
    pub author: String,
    pub url: String,
    pub likes: i64,
}
