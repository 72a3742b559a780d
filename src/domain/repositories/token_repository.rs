//! Repository trait for login token data access.

use crate::error::AppError;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

/// The user account a valid token belongs to.
#[derive(Debug, Clone, PartialEq)]
pub struct TokenOwner {
    pub user_id: i64,
    pub username: String,
}

/// A stored login token record.
///
/// Only the HMAC-SHA256 hash of the token is persisted; the raw token is
/// returned to the client once at login and never stored.
#[derive(Debug, Clone)]
pub struct ApiToken {
    pub id: i64,
    pub user_id: i64,
    pub token_hash: String,
    pub created_at: DateTime<Utc>,
    pub last_used_at: Option<DateTime<Utc>>,
    pub revoked_at: Option<DateTime<Utc>>,
}

/// Repository interface for issuing and validating login tokens.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgTokenRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TokenRepository: Send + Sync {
    /// Stores a new token hash for a user.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn create(&self, user_id: i64, token_hash: &str) -> Result<ApiToken, AppError>;

    /// Resolves a token hash to its owning user.
    ///
    /// Returns `Ok(None)` for unknown or revoked tokens.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_owner(&self, token_hash: &str) -> Result<Option<TokenOwner>, AppError>;

    /// Updates the `last_used_at` timestamp of a token.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn update_last_used(&self, token_hash: &str) -> Result<(), AppError>;
}
