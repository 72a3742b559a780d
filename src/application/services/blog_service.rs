//! Blog post CRUD service.

use serde_json::json;
use std::sync::Arc;

use crate::application::services::auth_service::AuthUser;
use crate::domain::entities::{Blog, NewBlog, UpdateBlog};
use crate::domain::repositories::BlogRepository;
use crate::error::AppError;

/// Service for creating, updating, and deleting blog posts.
pub struct BlogService {
    repository: Arc<dyn BlogRepository>,
}

impl BlogService {
    /// Creates a new blog service.
    pub fn new(repository: Arc<dyn BlogRepository>) -> Self {
        Self { repository }
    }

    /// Lists every blog post.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn list_blogs(&self) -> Result<Vec<Blog>, AppError> {
        self.repository.list().await
    }

    /// Creates a blog post on behalf of the authenticated user.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn create_blog(
        &self,
        title: String,
        author: String,
        url: String,
        likes: i64,
        creator: &AuthUser,
    ) -> Result<Blog, AppError> {
        self.repository
            .create(NewBlog {
                title,
                author,
                url,
                likes,
                user_id: Some(creator.id),
            })
            .await
    }

    /// Replaces the mutable fields of an existing blog post.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no post matches `id`.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn update_blog(&self, id: i64, update: UpdateBlog) -> Result<Blog, AppError> {
        self.repository
            .update(id, update)
            .await?
            .ok_or_else(|| AppError::not_found("Blog not found", json!({ "id": id })))
    }

    /// Deletes a blog post.
    ///
    /// Posts that record a creator may only be deleted by that creator.
    /// Posts without one (created before authenticated creation existed)
    /// are deletable by any authenticated user.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no post matches `id`.
    /// Returns [`AppError::Forbidden`] if `requester` is not the creator.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn delete_blog(&self, id: i64, requester: &AuthUser) -> Result<(), AppError> {
        let blog = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Blog not found", json!({ "id": id })))?;

        if blog.user_id.is_some_and(|creator| creator != requester.id) {
            return Err(AppError::forbidden(
                "Only the creator can delete a blog",
                json!({ "id": id }),
            ));
        }

        let deleted = self.repository.delete(id).await?;
        if !deleted {
            return Err(AppError::not_found("Blog not found", json!({ "id": id })));
        }

        Ok(())
    }

    /// Counts stored blog posts.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn count_blogs(&self) -> Result<i64, AppError> {
        self.repository.count().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockBlogRepository;
    use chrono::Utc;

    fn requester(id: i64) -> AuthUser {
        AuthUser {
            id,
            username: format!("user{id}"),
        }
    }

    fn stored_blog(id: i64, user_id: Option<i64>) -> Blog {
        Blog::new(
            id,
            "dating for dummies".to_string(),
            "pesho".to_string(),
            "www.blog1.com".to_string(),
            2,
            user_id,
            Utc::now(),
        )
    }

    #[tokio::test]
    async fn test_create_blog_records_creator() {
        let mut mock_repo = MockBlogRepository::new();

        mock_repo
            .expect_create()
            .withf(|new_blog: &NewBlog| new_blog.user_id == Some(7) && new_blog.likes == 0)
            .times(1)
            .returning(|new_blog| {
                Ok(Blog::new(
                    1,
                    new_blog.title,
                    new_blog.author,
                    new_blog.url,
                    new_blog.likes,
                    new_blog.user_id,
                    Utc::now(),
                ))
            });

        let service = BlogService::new(Arc::new(mock_repo));

        let blog = service
            .create_blog(
                "dating for dummies".to_string(),
                "pesho".to_string(),
                "www.blog1.com".to_string(),
                0,
                &requester(7),
            )
            .await
            .unwrap();

        assert_eq!(blog.user_id, Some(7));
    }

    #[tokio::test]
    async fn test_update_blog_not_found() {
        let mut mock_repo = MockBlogRepository::new();
        mock_repo.expect_update().times(1).returning(|_, _| Ok(None));

        let service = BlogService::new(Arc::new(mock_repo));

        let result = service
            .update_blog(
                99,
                UpdateBlog {
                    title: "t".to_string(),
                    author: "a".to_string(),
                    url: "u".to_string(),
                    likes: 20,
                },
            )
            .await;

        assert!(matches!(result.unwrap_err(), AppError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_delete_blog_by_creator() {
        let mut mock_repo = MockBlogRepository::new();
        mock_repo
            .expect_find_by_id()
            .times(1)
            .returning(|id| Ok(Some(stored_blog(id, Some(7)))));
        mock_repo.expect_delete().times(1).returning(|_| Ok(true));

        let service = BlogService::new(Arc::new(mock_repo));

        assert!(service.delete_blog(1, &requester(7)).await.is_ok());
    }

    #[tokio::test]
    async fn test_delete_blog_by_non_creator_forbidden() {
        let mut mock_repo = MockBlogRepository::new();
        mock_repo
            .expect_find_by_id()
            .times(1)
            .returning(|id| Ok(Some(stored_blog(id, Some(7)))));

        let service = BlogService::new(Arc::new(mock_repo));

        let result = service.delete_blog(1, &requester(8)).await;

        assert!(matches!(result.unwrap_err(), AppError::Forbidden { .. }));
    }

    #[tokio::test]
    async fn test_delete_blog_without_creator_allowed() {
        let mut mock_repo = MockBlogRepository::new();
        mock_repo
            .expect_find_by_id()
            .times(1)
            .returning(|id| Ok(Some(stored_blog(id, None))));
        mock_repo.expect_delete().times(1).returning(|_| Ok(true));

        let service = BlogService::new(Arc::new(mock_repo));

        assert!(service.delete_blog(1, &requester(8)).await.is_ok());
    }

    #[tokio::test]
    async fn test_delete_blog_not_found() {
        let mut mock_repo = MockBlogRepository::new();
        mock_repo
            .expect_find_by_id()
            .times(1)
            .returning(|_| Ok(None));

        let service = BlogService::new(Arc::new(mock_repo));

        let result = service.delete_blog(42, &requester(1)).await;

        assert!(matches!(result.unwrap_err(), AppError::NotFound { .. }));
    }
}
