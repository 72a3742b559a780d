//! Login and bearer token authentication service.

use argon2::{Argon2, PasswordHash, PasswordVerifier};
use base64::Engine as _;
use hmac::{Hmac, Mac};
use serde_json::json;
use sha2::Sha256;
use std::sync::Arc;

use crate::domain::entities::User;
use crate::domain::repositories::{TokenRepository, UserRepository};
use crate::error::AppError;

type HmacSha256 = Hmac<Sha256>;

/// Length of random bytes before base64 encoding.
const TOKEN_LENGTH_BYTES: usize = 24;

/// The authenticated caller, resolved from a bearer token.
///
/// Injected into request extensions by the auth middleware.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthUser {
    pub id: i64,
    pub username: String,
}

/// Service issuing login tokens and authenticating API requests.
///
/// Tokens are opaque random strings. Only their HMAC-SHA256 (keyed by
/// `signing_secret`) is stored, so an attacker with read-only access to
/// the database cannot verify or forge tokens without the server-side
/// secret.
pub struct AuthService {
    tokens: Arc<dyn TokenRepository>,
    users: Arc<dyn UserRepository>,
    signing_secret: String,
}

impl AuthService {
    /// Creates a new authentication service.
    ///
    /// `signing_secret` must match the value used when existing tokens
    /// were issued, otherwise every stored token becomes invalid.
    pub fn new(
        tokens: Arc<dyn TokenRepository>,
        users: Arc<dyn UserRepository>,
        signing_secret: String,
    ) -> Self {
        Self {
            tokens,
            users,
            signing_secret,
        }
    }

    /// Verifies credentials and issues a new bearer token.
    ///
    /// Returns the raw token together with the logged-in user. The raw
    /// token is shown to the client exactly once and never persisted.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unauthorized`] on unknown username or wrong
    /// password. Returns [`AppError::Internal`] on database errors.
    pub async fn login(&self, username: &str, password: &str) -> Result<(String, User), AppError> {
        let user = self
            .users
            .find_by_username(username)
            .await?
            .ok_or_else(invalid_credentials)?;

        let parsed_hash = PasswordHash::new(&user.password_hash).map_err(|e| {
            tracing::error!(error = %e, user_id = user.id, "Stored password hash is malformed");
            AppError::internal("Login failed", json!({}))
        })?;

        Argon2::default()
            .verify_password(password.as_bytes(), &parsed_hash)
            .map_err(|_| invalid_credentials())?;

        let token = generate_token();
        self.tokens.create(user.id, &self.hash_token(&token)).await?;

        Ok((token, user))
    }

    /// Authenticates a raw bearer token.
    ///
    /// On success, updates the token's `last_used_at` timestamp and
    /// returns the owning user.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unauthorized`] for unknown or revoked tokens.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn authenticate(&self, token: &str) -> Result<AuthUser, AppError> {
        let token_hash = self.hash_token(token);

        let owner = self.tokens.find_owner(&token_hash).await?.ok_or_else(|| {
            AppError::unauthorized(
                "Unauthorized",
                json!({ "reason": "Invalid or revoked token" }),
            )
        })?;

        let _ = self.tokens.update_last_used(&token_hash).await;

        Ok(AuthUser {
            id: owner.user_id,
            username: owner.username,
        })
    }

    /// Hashes a raw token with HMAC-SHA256 using the server signing secret.
    ///
    /// Returns a 64-character lowercase hex-encoded MAC.
    fn hash_token(&self, token: &str) -> String {
        let mut mac = HmacSha256::new_from_slice(self.signing_secret.as_bytes())
            .expect("HMAC accepts any key length");
        mac.update(token.as_bytes());
        hex::encode(mac.finalize().into_bytes())
    }
}

fn invalid_credentials() -> AppError {
    AppError::unauthorized(
        "Invalid username or password",
        json!({ "reason": "Credentials did not match" }),
    )
}

/// Generates an opaque random login token.
///
/// Uses `getrandom` for entropy and encodes the result as URL-safe base64
/// without padding, producing a 32-character token.
///
/// # Panics
///
/// Panics if the system random number generator fails (extremely rare).
fn generate_token() -> String {
    let mut buffer = [0u8; TOKEN_LENGTH_BYTES];

    getrandom::fill(&mut buffer).expect("Failed to generate random bytes");

    base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(buffer)
}
