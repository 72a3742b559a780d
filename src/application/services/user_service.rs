//! User registration and lookup service.

use argon2::password_hash::{SaltString, rand_core::OsRng};
use argon2::{Argon2, PasswordHasher};
use serde_json::json;
use std::sync::Arc;

use crate::domain::entities::{NewUser, User};
use crate::domain::repositories::UserRepository;
use crate::error::AppError;

/// Service for registering and listing user accounts.
///
/// Passwords are hashed with Argon2 before they reach the repository.
pub struct UserService {
    repository: Arc<dyn UserRepository>,
    argon2: Argon2<'static>,
}

impl UserService {
    /// Creates a new user service.
    pub fn new(repository: Arc<dyn UserRepository>) -> Self {
        Self {
            repository,
            argon2: Argon2::default(),
        }
    }

    /// Registers a new user account.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the username is already taken.
    /// Returns [`AppError::Internal`] if password hashing fails or on
    /// database errors.
    pub async fn register(
        &self,
        username: String,
        name: String,
        password: &str,
    ) -> Result<User, AppError> {
        if self.repository.find_by_username(&username).await?.is_some() {
            return Err(AppError::conflict(
                "Username is already taken",
                json!({ "username": username }),
            ));
        }

        let password_hash = self.hash_password(password)?;

        self.repository
            .create(NewUser {
                username,
                name,
                password_hash,
            })
            .await
    }

    /// Lists every registered user.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn list_users(&self) -> Result<Vec<User>, AppError> {
        self.repository.list().await
    }

    /// Hashes a password with Argon2 and a fresh random salt.
    fn hash_password(&self, password: &str) -> Result<String, AppError> {
        let salt = SaltString::generate(&mut OsRng);

        self.argon2
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| {
                tracing::error!(error = %e, "Password hashing failed");
                AppError::internal("Failed to hash password", json!({}))
            })
    }
}
