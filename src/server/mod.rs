//! Static Host
//!
//! Serves the built client and its JSON data files, built with Axum.
//!
//! # Endpoints
//!
//! - `GET /data/*` - JSON data files from `data_dir` (404 when missing)
//! - `GET /health/live` - Liveness
//! - `GET /health` - Full health status
//! - anything else - file from `dist_dir`, or `index.html` so that
//!   history-mode client routes survive a reload

pub mod error;
pub mod health;
pub mod state;

pub use error::{ServerError, ServerResult};
pub use state::HostState;

use axum::{http::HeaderValue, routing::get, Router};
use std::sync::Arc;
use tower_http::{
    cors::CorsLayer,
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};

use crate::config::ServerConfig;

/// Build the host router with all routes and middleware
pub fn build_router(state: HostState) -> Router {
    let config = Arc::clone(&state.config);

    let health_routes = Router::new()
        .route("/live", get(health::liveness))
        .route("/", get(health::full_health));

    let spa = ServeDir::new(&config.dist_dir)
        .fallback(ServeFile::new(config.dist_dir.join("index.html")));

    Router::new()
        .nest("/health", health_routes)
        .nest_service("/data", ServeDir::new(&config.data_dir))
        .fallback_service(spa)
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(&config))
        .with_state(Arc::new(state))
}

fn cors_layer(config: &ServerConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = config
        .cors_origins
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("Ignoring invalid CORS origin: {}", origin);
                None
            }
        })
        .collect();

    CorsLayer::new().allow_origin(origins)
}

/// Start the static host
pub async fn serve(config: ServerConfig) -> ServerResult<()> {
    if !config.dist_dir.is_dir() {
        return Err(ServerError::Directory {
            path: config.dist_dir.clone(),
            reason: "client build output not found (run `trunk build` in marauders-ui)"
                .to_string(),
        });
    }
    if !config.data_dir.is_dir() {
        tracing::warn!("Data directory {:?} missing, /data will answer 404", config.data_dir);
    }

    let addr = config.addr();
    let router = build_router(HostState::new(config));
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("ITALIAN MARAUDERS listening on {}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| ServerError::Internal(format!("Server error: {}", e)))?;

    tracing::info!("Static host shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}
