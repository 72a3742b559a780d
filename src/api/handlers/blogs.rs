//! Handlers for blog post CRUD endpoints.

use axum::{
    Extension, Json,
    extract::{Path, State},
    http::StatusCode,
};
use validator::Validate;

use crate::api::dto::blog::{BlogResponse, CreateBlogRequest, UpdateBlogRequest};
use crate::application::services::AuthUser;
use crate::domain::entities::UpdateBlog;
use crate::error::AppError;
use crate::state::AppState;

/// Lists every blog post.
///
/// # Endpoint
///
/// `GET /api/blogs`
pub async fn blog_list_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<BlogResponse>>, AppError> {
    let blogs = state.blog_service.list_blogs().await?;

    Ok(Json(blogs.into_iter().map(BlogResponse::from).collect()))
}

/// Creates a new blog post for the authenticated user.
///
/// # Endpoint
///
/// `POST /api/blogs`
///
/// # Request Body
///
/// ```json
/// {
///   "title": "async and await are awesome",
///   "author": "mixxo",
///   "url": "www.awesome-await.com",
///   "likes": 54   // optional, defaults to 0
/// }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request if `title`, `author`, or `url` is missing or
/// empty, or if `likes` is negative.
pub async fn create_blog_handler(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Json(payload): Json<CreateBlogRequest>,
) -> Result<(StatusCode, Json<BlogResponse>), AppError> {
    payload.validate()?;

    let blog = state
        .blog_service
        .create_blog(
            payload.title,
            payload.author,
            payload.url,
            payload.likes.unwrap_or(0),
            &user,
        )
        .await?;

    Ok((StatusCode::CREATED, Json(blog.into())))
}

/// Fully updates an existing blog post.
///
/// # Endpoint
///
/// `PUT /api/blogs/{id}`
///
/// All four fields are required; the post is replaced, not patched. The
/// typical use is bumping the like count.
///
/// # Errors
///
/// Returns 404 Not Found if no post matches `id`.
/// Returns 400 Bad Request if validation fails.
pub async fn update_blog_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
    Json(payload): Json<UpdateBlogRequest>,
) -> Result<Json<BlogResponse>, AppError> {
    payload.validate()?;

    let blog = state
        .blog_service
        .update_blog(
            id,
            UpdateBlog {
                title: payload.title,
                author: payload.author,
                url: payload.url,
                likes: payload.likes,
            },
        )
        .await?;

    Ok(Json(blog.into()))
}

/// Deletes a blog post.
///
/// # Endpoint
///
/// `DELETE /api/blogs/{id}`
///
/// # Errors
///
/// Returns 404 Not Found if no post matches `id`.
/// Returns 403 Forbidden if the requester is not the post's creator.
pub async fn delete_blog_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
) -> Result<StatusCode, AppError> {
    state.blog_service.delete_blog(id, &user).await?;

    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::handlers::test_util::{auth_user, state_with_blogs};
    use crate::domain::entities::Blog;
    use crate::domain::repositories::MockBlogRepository;
    use axum::Router;
    use axum::routing::{delete, get, put};
    use axum_test::TestServer;
    use chrono::Utc;
    use serde_json::json;

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

    fn make_server(blogs: MockBlogRepository) -> TestServer {
        let state = state_with_blogs(blogs);
        let app = Router::new()
            .route("/api/blogs", get(blog_list_handler).post(create_blog_handler))
            .route("/api/blogs/{id}", put(update_blog_handler))
            .route("/api/blogs/{id}", delete(delete_blog_handler))
            .layer(Extension(auth_user()))
            .with_state(state);
        TestServer::new(app).unwrap()
    }

    #[tokio::test]
    async fn test_blogs_are_returned_as_json() {
        let mut blogs = MockBlogRepository::new();
        blogs
            .expect_list()
            .returning(|| Ok(vec![stored_blog(1, None), stored_blog(2, None)]));

        let server = make_server(blogs);
        let response = server.get("/api/blogs").await;

        response.assert_status_ok();

        let body = response.json::<serde_json::Value>();
        assert_eq!(body.as_array().unwrap().len(), 2);
        assert_eq!(body[0]["id"], 1);
        assert_eq!(body[0]["title"], "dating for dummies");
    }

    #[tokio::test]
    async fn test_a_valid_blog_can_be_added() {
        let mut blogs = MockBlogRepository::new();
        blogs.expect_create().times(1).returning(|new_blog| {
            Ok(Blog::new(
                4,
                new_blog.title,
                new_blog.author,
                new_blog.url,
                new_blog.likes,
                new_blog.user_id,
                Utc::now(),
            ))
        });

        let server = make_server(blogs);
        let response = server
            .post("/api/blogs")
            .json(&json!({
                "title": "async and await are awesome",
                "author": "mixxo",
                "url": "www.awesome-await.com",
                "likes": 54
            }))
            .await;

        response.assert_status(StatusCode::CREATED);

        let body = response.json::<serde_json::Value>();
        assert_eq!(body["title"], "async and await are awesome");
        assert_eq!(body["likes"], 54);
    }

    #[tokio::test]
    async fn test_missing_likes_defaults_to_zero() {
        let mut blogs = MockBlogRepository::new();
        blogs
            .expect_create()
            .withf(|new_blog| new_blog.likes == 0)
            .times(1)
            .returning(|new_blog| {
                Ok(Blog::new(
                    5,
                    new_blog.title,
                    new_blog.author,
                    new_blog.url,
                    new_blog.likes,
                    new_blog.user_id,
                    Utc::now(),
                ))
            });

        let server = make_server(blogs);
        let response = server
            .post("/api/blogs")
            .json(&json!({
                "title": "no likes yet",
                "author": "misho",
                "url": "www.blog2.com"
            }))
            .await;

        response.assert_status(StatusCode::CREATED);
        assert_eq!(response.json::<serde_json::Value>()["likes"], 0);
    }

    #[tokio::test]
    async fn test_detect_missing_title_or_url() {
        let server = make_server(MockBlogRepository::new());
        let response = server
            .post("/api/blogs")
            .json(&json!({
                "title": "",
                "author": "mixxo",
                "url": "",
                "likes": 54
            }))
            .await;

        response.assert_status_bad_request();
    }

    #[tokio::test]
    async fn test_a_valid_blog_can_be_updated() {
        let mut blogs = MockBlogRepository::new();
        blogs
            .expect_update()
            .withf(|id, update| *id == 1 && update.likes == 20)
            .times(1)
            .returning(|id, update| {
                Ok(Some(Blog::new(
                    id,
                    update.title,
                    update.author,
                    update.url,
                    update.likes,
                    None,
                    Utc::now(),
                )))
            });

        let server = make_server(blogs);
        let response = server
            .put("/api/blogs/1")
            .json(&json!({
                "title": "dating for dummies",
                "author": "pesho",
                "url": "www.blog1.com",
                "likes": 20
            }))
            .await;

        response.assert_status_ok();
        assert_eq!(response.json::<serde_json::Value>()["likes"], 20);
    }

    #[tokio::test]
    async fn test_update_unknown_blog_returns_404() {
        let mut blogs = MockBlogRepository::new();
        blogs.expect_update().times(1).returning(|_, _| Ok(None));

        let server = make_server(blogs);
        let response = server
            .put("/api/blogs/999")
            .json(&json!({
                "title": "t",
                "author": "a",
                "url": "u",
                "likes": 0
            }))
            .await;

        response.assert_status_not_found();
    }

    #[tokio::test]
    async fn test_delete_succeeds_with_204() {
        let mut blogs = MockBlogRepository::new();
        blogs
            .expect_find_by_id()
            .times(1)
            .returning(|id| Ok(Some(stored_blog(id, Some(7)))));
        blogs.expect_delete().times(1).returning(|_| Ok(true));

        let server = make_server(blogs);
        let response = server.delete("/api/blogs/1").await;

        response.assert_status(StatusCode::NO_CONTENT);
    }

    #[tokio::test]
    async fn test_delete_unknown_blog_returns_404() {
        let mut blogs = MockBlogRepository::new();
        blogs.expect_find_by_id().times(1).returning(|_| Ok(None));

        let server = make_server(blogs);
        let response = server.delete("/api/blogs/999").await;

        response.assert_status_not_found();
    }

    #[tokio::test]
    async fn test_delete_foreign_blog_returns_403() {
        let mut blogs = MockBlogRepository::new();
        blogs
            .expect_find_by_id()
            .times(1)
            .returning(|id| Ok(Some(stored_blog(id, Some(99)))));

        let server = make_server(blogs);
        let response = server.delete("/api/blogs/1").await;

        response.assert_status(StatusCode::FORBIDDEN);
    }
}
