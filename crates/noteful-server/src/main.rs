//! Entry point for the noteful-server binary.

use axum::middleware;
use http::HeaderValue;
use noteful_server::{
    config::ServerConfig,
    init_tracing,
    middleware::request_id::{make_span, propagate_request_id, request_id_layer},
    routes,
    state::AppState,
};
use noteful_store::{Store, StoreConfig};
use tokio::net::TcpListener;
use tokio::signal;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // A missing .env file is fine
    dotenvy::dotenv().ok();

    let config = ServerConfig::from_env()?;

    init_tracing(&config.log_level, config.log_format);

    tracing::info!("Starting noteful-server");
    tracing::info!(
        port = config.port,
        log_level = %config.log_level,
        "Configuration loaded"
    );

    let store_config = StoreConfig::from_env()?;
    let store = Store::connect(store_config).await?;

    let state = AppState::new(store, config.clone());

    let cors = build_cors_layer(&config.cors_allowed_origins);

    // Outermost first: the id is set before the trace span reads it.
    let app = routes::build_router(state).layer(
        ServiceBuilder::new()
            .layer(request_id_layer())
            .layer(TraceLayer::new_for_http().make_span_with(make_span))
            .layer(middleware::from_fn(propagate_request_id))
            .layer(cors),
    );

    let addr = config.socket_addr();
    let listener = TcpListener::bind(addr).await?;
    tracing::info!(%addr, "Listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

/// Build CORS layer from configuration.
fn build_cors_layer(allowed_origins: &str) -> CorsLayer {
    let layer = CorsLayer::new().allow_methods(Any).allow_headers(Any);

    if allowed_origins == "*" {
        return layer.allow_origin(Any);
    }

    let origins: Vec<HeaderValue> = allowed_origins
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(%origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    layer.allow_origin(origins)
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, starting graceful shutdown");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, starting graceful shutdown");
        }
    }
}
