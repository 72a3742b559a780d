//! Shared application state injected into request handlers.

use std::sync::Arc;

use crate::application::services::{AuthService, BlogService, StatsService, UserService};

/// Application state shared across all handlers.
///
/// Holds the service layer behind `Arc`s so the state is cheap to clone
/// per request. Storage access goes through the services; handlers never
/// touch a connection pool directly.
#[derive(Clone)]
pub struct AppState {
    pub blog_service: Arc<BlogService>,
    pub user_service: Arc<UserService>,
    pub auth_service: Arc<AuthService>,
    pub stats_service: Arc<StatsService>,
}

impl AppState {
    /// Creates application state from the assembled services.
    pub fn new(
        blog_service: Arc<BlogService>,
        user_service: Arc<UserService>,
        auth_service: Arc<AuthService>,
        stats_service: Arc<StatsService>,
    ) -> Self {
        Self {
            blog_service,
            user_service,
            auth_service,
            stats_service,
        }
    }
}
