//! DTOs for the login endpoint.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Login credentials.
#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 1, message = "username must not be empty"))]
    pub username: String,

    #[validate(length(min = 1, message = "password must not be empty"))]
    pub password: String,
}

/// Successful login response carrying the bearer token.
///
/// The token is shown exactly once; only its hash is stored server-side.
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
    pub username: String,
    pub name: String,
}
