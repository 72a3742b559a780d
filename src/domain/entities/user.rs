//! User entity representing a registered account.

use chrono::{DateTime, Utc};

/// A registered user account.
///
/// `password_hash` is an Argon2 PHC string. The raw password is never
/// stored, and the hash must never leave the service in a response body.
#[derive(Debug, Clone)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub name: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

/// Input data for creating a new user account.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    pub name: String,
    pub password_hash: String,
}
