//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod blogs;
pub mod health;
pub mod login;
pub mod stats;
pub mod users;

pub use blogs::{blog_list_handler, create_blog_handler, delete_blog_handler, update_blog_handler};
pub use health::health_handler;
pub use login::login_handler;
pub use stats::blog_stats_handler;
pub use users::{create_user_handler, user_list_handler};

/// Builders assembling an [`AppState`](crate::state::AppState) over mock
/// repositories for handler tests.
#[cfg(test)]
pub(crate) mod test_util {
    use std::sync::Arc;

    use crate::application::services::{
        AuthService, AuthUser, BlogService, StatsService, UserService,
    };
    use crate::domain::repositories::{
        MockBlogRepository, MockTokenRepository, MockUserRepository,
    };
    use crate::state::AppState;

    pub fn auth_user() -> AuthUser {
        AuthUser {
            id: 7,
            username: "root".to_string(),
        }
    }

    pub fn state_with(
        blogs: MockBlogRepository,
        users: MockUserRepository,
        tokens: MockTokenRepository,
    ) -> AppState {
        let blog_repo = Arc::new(blogs);
        let user_repo = Arc::new(users);
        let token_repo = Arc::new(tokens);

        AppState::new(
            Arc::new(BlogService::new(blog_repo.clone())),
            Arc::new(UserService::new(user_repo.clone())),
            Arc::new(AuthService::new(
                token_repo,
                user_repo,
                "test-signing-secret".to_string(),
            )),
            Arc::new(StatsService::new(blog_repo)),
        )
    }

    pub fn state_with_blogs(blogs: MockBlogRepository) -> AppState {
        state_with(
            blogs,
            MockUserRepository::new(),
            MockTokenRepository::new(),
        )
    }

    pub fn state_with_users(users: MockUserRepository) -> AppState {
        state_with(
            MockBlogRepository::new(),
            users,
            MockTokenRepository::new(),
        )
    }

    pub fn state_with_auth(users: MockUserRepository, tokens: MockTokenRepository) -> AppState {
        state_with(MockBlogRepository::new(), users, tokens)
    }
}
