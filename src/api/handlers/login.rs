//! Handler for the login endpoint.

use axum::{Json, extract::State};
use validator::Validate;

use crate::api::dto::login::{LoginRequest, LoginResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Verifies credentials and issues a bearer token.
///
/// # Endpoint
///
/// `POST /api/login`
///
/// # Response
///
/// ```json
/// {
///   "token": "k3mX...",
///   "username": "mixxo",
///   "name": "Mixxo"
/// }
/// ```
///
/// # Errors
///
/// Returns 401 Unauthorized on unknown username or wrong password.
pub async fn login_handler(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, AppError> {
    payload.validate()?;

    let (token, user) = state
        .auth_service
        .login(&payload.username, &payload.password)
        .await?;

    Ok(Json(LoginResponse {
        token,
        username: user.username,
        name: user.name,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::handlers::test_util::state_with_auth;
    use crate::domain::entities::User;
    use crate::domain::repositories::{ApiToken, MockTokenRepository, MockUserRepository};
    use argon2::password_hash::{SaltString, rand_core::OsRng};
    use argon2::{Argon2, PasswordHasher};
    use axum::Router;
    use axum::routing::post;
    use axum_test::TestServer;
    use chrono::Utc;
    use serde_json::json;

    fn stored_user(password: &str) -> User {
        let salt = SaltString::generate(&mut OsRng);
        let password_hash = Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .unwrap()
            .to_string();

        User {
            id: 1,
            username: "root".to_string(),
            name: "Superuser".to_string(),
            password_hash,
            created_at: Utc::now(),
        }
    }

    fn make_server(users: MockUserRepository, tokens: MockTokenRepository) -> TestServer {
        let state = state_with_auth(users, tokens);
        let app = Router::new()
            .route("/api/login", post(login_handler))
            .with_state(state);
        TestServer::new(app).unwrap()
    }

    #[tokio::test]
    async fn test_login_with_valid_credentials() {
        let mut users = MockUserRepository::new();
        users
            .expect_find_by_username()
            .times(1)
            .returning(|_| Ok(Some(stored_user("sekret"))));

        let mut tokens = MockTokenRepository::new();
        tokens.expect_create().times(1).returning(|user_id, hash| {
            Ok(ApiToken {
                id: 1,
                user_id,
                token_hash: hash.to_string(),
                created_at: Utc::now(),
                last_used_at: None,
                revoked_at: None,
            })
        });

        let server = make_server(users, tokens);
        let response = server
            .post("/api/login")
            .json(&json!({ "username": "root", "password": "sekret" }))
            .await;

        response.assert_status_ok();

        let body = response.json::<serde_json::Value>();
        assert_eq!(body["username"], "root");
        assert_eq!(body["token"].as_str().unwrap().len(), 32);
    }

    #[tokio::test]
    async fn test_login_with_wrong_password() {
        let mut users = MockUserRepository::new();
        users
            .expect_find_by_username()
            .times(1)
            .returning(|_| Ok(Some(stored_user("sekret"))));

        let server = make_server(users, MockTokenRepository::new());
        let response = server
            .post("/api/login")
            .json(&json!({ "username": "root", "password": "wrong" }))
            .await;

        response.assert_status_unauthorized();
    }

    #[tokio::test]
    async fn test_login_with_unknown_username() {
        let mut users = MockUserRepository::new();
        users
            .expect_find_by_username()
            .times(1)
            .returning(|_| Ok(None));

        let server = make_server(users, MockTokenRepository::new());
        let response = server
            .post("/api/login")
            .json(&json!({ "username": "nobody", "password": "sekret" }))
            .await;

        response.assert_status_unauthorized();
    }
}
