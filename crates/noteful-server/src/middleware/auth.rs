//! Bearer token gate for protected routers.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};

use crate::auth::authenticate;
use crate::error::ApiError;
use crate::state::AppState;

/// Reject requests without a valid bearer token before any handler runs.
///
/// On success the caller's `AuthenticatedUser` is stored in the request
/// extensions, where the extractor picks it up.
pub async fn require_auth(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let user = authenticate(request.headers(), &state.config().jwt_secret)?;
    tracing::Span::current().record("user_id", tracing::field::display(user.user_id));
    request.extensions_mut().insert(user);
    Ok(next.run(request).await)
}
