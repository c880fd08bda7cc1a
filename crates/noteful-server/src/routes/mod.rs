//! Route definitions for the HTTP API.

pub mod auth;
pub mod folders;
pub mod health;
pub mod notes;
pub mod tags;
pub mod users;

use axum::{Router, middleware};

use crate::error::ApiError;
use crate::middleware::auth::require_auth;
use crate::state::AppState;

/// Build the complete router with all routes.
///
/// Folder, note and tag routes plus token refresh sit behind `require_auth`.
pub fn build_router(state: AppState) -> Router {
    let protected = Router::new()
        .merge(auth::protected_routes())
        .merge(folders::routes())
        .merge(notes::routes())
        .merge(tags::routes())
        .route_layer(middleware::from_fn_with_state(state.clone(), require_auth));

    Router::new()
        .merge(health::routes())
        .merge(auth::routes())
        .merge(users::routes())
        .merge(protected)
        .fallback(|| async { ApiError::NotFound })
        .with_state(state)
}
