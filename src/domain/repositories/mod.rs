//! Repository trait definitions for the domain layer.
//!
//! Traits define the contract for data operations; concrete
//! implementations live in `crate::infrastructure::persistence`. Mock
//! implementations are auto-generated via `mockall` for testing.

pub mod blog_repository;
pub mod token_repository;
pub mod user_repository;

pub use blog_repository::BlogRepository;
pub use token_repository::{ApiToken, TokenOwner, TokenRepository};
pub use user_repository::UserRepository;

#[cfg(test)]
pub use blog_repository::MockBlogRepository;
#[cfg(test)]
pub use token_repository::MockTokenRepository;
#[cfg(test)]
pub use user_repository::MockUserRepository;
