//! User registration.

use axum::{
    Json, Router,
    extract::State,
    http::{StatusCode, header},
    response::IntoResponse,
    routing::post,
};
use noteful_core::{User, UserRegistration};
use noteful_store::NewUser;

use crate::auth;
use crate::error::ApiResult;
use crate::extract::JsonBody;
use crate::state::AppState;

/// POST /api/users
async fn create_user(
    State(state): State<AppState>,
    JsonBody(body): JsonBody,
) -> ApiResult<impl IntoResponse> {
    let registration = UserRegistration::from_json(&body)?;
    let password_hash = auth::hash_password(&registration.password)?;

    let row = state
        .store()
        .insert_user(&NewUser::new(
            registration.username,
            registration.full_name,
            password_hash,
        ))
        .await?;
    let user = User::from(row);

    tracing::info!(user_id = %user.id, username = %user.username, "User registered");

    let location = format!("/api/users/{}", user.id);
    Ok((StatusCode::CREATED, [(header::LOCATION, location)], Json(user)))
}

/// Build user routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/api/users", post(create_user))
}
