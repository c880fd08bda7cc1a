//! Authentication routes: login and token refresh.

use axum::{Json, Router, extract::State, routing::post};
use noteful_core::{LoginRequest, User};
use serde::{Deserialize, Serialize};

use crate::auth::{self, AuthenticatedUser};
use crate::error::{ApiError, ApiResult};
use crate::extract::JsonBody;
use crate::state::AppState;

// ============================================================================
// Request/Response Types
// ============================================================================

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenResponse {
    pub auth_token: String,
}

// ============================================================================
// Route Handlers
// ============================================================================

/// POST /api/login
async fn login(
    State(state): State<AppState>,
    JsonBody(body): JsonBody,
) -> ApiResult<Json<TokenResponse>> {
    let request = LoginRequest::from_json(&body)?;

    let invalid = || ApiError::Unauthorized("Invalid username or password".to_string());

    let row = state
        .store()
        .get_user_by_username(&request.username)
        .await?
        .ok_or_else(invalid)?;

    if !auth::verify_password(&request.password, &row.password_hash)? {
        tracing::debug!(username = %request.username, "Password mismatch");
        return Err(invalid());
    }

    let user = User::from(row);
    let config = state.config();
    let auth_token = auth::create_token(&user, &config.jwt_secret, config.jwt_expiry_hours)?;

    tracing::info!(user_id = %user.id, username = %user.username, "User logged in");

    Ok(Json(TokenResponse { auth_token }))
}

/// POST /api/refresh - issue a fresh token for the current caller.
async fn refresh(
    State(state): State<AppState>,
    user: AuthenticatedUser,
) -> ApiResult<Json<TokenResponse>> {
    let config = state.config();
    let auth_token = auth::create_token(
        &User::from(&user),
        &config.jwt_secret,
        config.jwt_expiry_hours,
    )?;

    tracing::debug!(user_id = %user.user_id, "Token refreshed");

    Ok(Json(TokenResponse { auth_token }))
}

/// Build the public auth routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/api/login", post(login))
}

/// Build the auth routes that need a valid token.
pub fn protected_routes() -> Router<AppState> {
    Router::new().route("/api/refresh", post(refresh))
}
