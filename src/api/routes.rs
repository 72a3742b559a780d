//! API route configuration.
//!
//! Routes are split into a public group and a group protected by bearer
//! token authentication via [`crate::api::middleware::auth`].

use crate::api::handlers::{
    blog_list_handler, blog_stats_handler, create_blog_handler, create_user_handler,
    delete_blog_handler, login_handler, update_blog_handler, user_list_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post, put},
};

/// Routes reachable without authentication.
///
/// # Endpoints
///
/// - `GET  /blogs`        - List all blog posts
/// - `GET  /blogs/stats`  - Aggregated blog statistics
/// - `GET  /users`        - List registered users
/// - `POST /users`        - Register a new user
/// - `POST /login`        - Verify credentials, issue a bearer token
pub fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/blogs", get(blog_list_handler))
        .route("/blogs/stats", get(blog_stats_handler))
        .route("/users", get(user_list_handler).post(create_user_handler))
        .route("/login", post(login_handler))
}

/// Routes requiring bearer token authentication.
///
/// # Endpoints
///
/// - `POST   /blogs`      - Create a blog post
/// - `PUT    /blogs/{id}` - Fully update a blog post
/// - `DELETE /blogs/{id}` - Delete a blog post (creator only)
pub fn protected_routes() -> Router<AppState> {
    Router::new()
        .route("/blogs", post(create_blog_handler))
        .route(
            "/blogs/{id}",
            put(update_blog_handler).delete(delete_blog_handler),
        )
}
