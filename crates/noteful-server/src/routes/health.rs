//! Health check endpoint.

use axum::{Json, Router, extract::State, http::StatusCode, routing::get};
use serde::Serialize;

use crate::state::AppState;

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Service status.
    pub status: &'static str,
    /// Database reachability.
    pub database: &'static str,
}

impl HealthResponse {
    fn from_ping(ok: bool) -> (StatusCode, Self) {
        if ok {
            (
                StatusCode::OK,
                Self {
                    status: "ok",
                    database: "connected",
                },
            )
        } else {
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Self {
                    status: "degraded",
                    database: "unavailable",
                },
            )
        }
    }
}

/// GET /health - Health check endpoint.
async fn health_check(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    let ok = match state.store().ping().await {
        Ok(()) => true,
        Err(e) => {
            tracing::warn!(error = %e, "Database ping failed");
            false
        }
    };
    let (status, body) = HealthResponse::from_ping(ok);
    (status, Json(body))
}

/// Build health check routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_health_statuses() {
        let (status, body) = HealthResponse::from_ping(true);
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.status, "ok");

        let (status, body) = HealthResponse::from_ping(false);
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(body.database, "unavailable");
    }
}
