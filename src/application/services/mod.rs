//! Business logic services for the application layer.

pub mod auth_service;
pub mod blog_service;
pub mod stats_service;
pub mod user_service;

pub use auth_service::{AuthService, AuthUser};
pub use blog_service::BlogService;
pub use stats_service::{BlogStats, StatsService};
pub use user_service::UserService;
