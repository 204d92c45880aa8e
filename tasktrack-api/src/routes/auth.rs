/// Authentication endpoints
///
/// This module provides the username/password exchange and the token-gated
/// identity echo:
///
/// # Endpoints
///
/// - `POST /login` - Verify credentials and issue an access token
/// - `GET /protected` - Echo the identity carried by a valid bearer token

use crate::{
    app::{AppState, CurrentUser},
    error::{ApiError, ApiResult},
};
use axum::{extract::State, Extension, Json};
use serde::{Deserialize, Serialize};
use tasktrack_shared::{auth::jwt, models::user::User};

/// Login request
///
/// Fields arrive optional so that missing credentials can be reported as a
/// 400 rather than a deserialization failure.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    /// Login identity
    pub username: Option<String>,

    /// Plaintext password
    pub password: Option<String>,
}

/// Login response
#[derive(Debug, Serialize, Deserialize)]
pub struct LoginResponse {
    /// Signed access token carrying the username as subject
    pub access_token: String,
}

/// Protected response
#[derive(Debug, Serialize, Deserialize)]
pub struct ProtectedResponse {
    /// Username embedded in the presented token
    pub logged_in_as: String,
}

/// Login handler
///
/// Looks up the user by exact username and compares the stored password
/// with plain equality; the stored passwords are plaintext. Do not point
/// this at real credentials.
///
/// # Endpoint
///
/// ```text
/// POST /login
/// Content-Type: application/json
///
/// {
///   "username": "admin",
///   "password": "123"
/// }
/// ```
///
/// # Response
///
/// ```json
/// {
///   "access_token": "eyJ..."
/// }
/// ```
///
/// # Errors
///
/// - `400 Bad Request`: missing username or password
/// - `401 Unauthorized`: unknown username or wrong password
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> ApiResult<Json<LoginResponse>> {
    let username = req
        .username
        .as_deref()
        .filter(|u| !u.is_empty())
        .ok_or_else(|| ApiError::BadRequest("Missing username or password".to_string()))?;
    let password = req
        .password
        .as_deref()
        .filter(|p| !p.is_empty())
        .ok_or_else(|| ApiError::BadRequest("Missing username or password".to_string()))?;

    let user = User::find_by_username(&state.db, username)
        .await?
        .filter(|user| user.password_matches(password))
        .ok_or_else(|| ApiError::Unauthorized("Invalid credentials".to_string()))?;

    let claims = jwt::Claims::new(user.username.clone());
    let access_token = jwt::create_token(&claims, state.jwt_secret())?;

    tracing::info!(username = %user.username, "Login succeeded");

    Ok(Json(LoginResponse { access_token }))
}

/// Protected handler
///
/// Requires a valid, unexpired bearer token; the JWT middleware validates
/// it and injects [`CurrentUser`] before this handler runs.
///
/// # Endpoint
///
/// ```text
/// GET /protected
/// Authorization: Bearer eyJ...
/// ```
///
/// # Response
///
/// ```json
/// {
///   "logged_in_as": "admin"
/// }
/// ```
///
/// # Errors
///
/// - `401 Unauthorized`: absent, malformed, expired, or badly signed token
pub async fn protected(
    Extension(current_user): Extension<CurrentUser>,
) -> ApiResult<Json<ProtectedResponse>> {
    Ok(Json(ProtectedResponse {
        logged_in_as: current_user.username,
    }))
}
