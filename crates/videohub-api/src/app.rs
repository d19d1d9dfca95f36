//! Application builder: wires router + middleware + state into an Axum app.

use std::sync::Arc;

use axum::Router;
use axum::middleware as axum_middleware;
use chrono::Utc;
use tower_http::trace::TraceLayer;

use videohub_core::config::AppConfig;
use videohub_core::error::AppError;
use videohub_core::result::AppResult;
use videohub_entity::video::{NewVideo, Resolution};
use videohub_store::VideoStore;

use crate::middleware::compression::build_compression_layer;
use crate::middleware::cors::build_cors_layer;
use crate::middleware::logging::request_logging;
use crate::router::build_router;
use crate::state::AppState;

/// Builds the complete Axum application with all routes and middleware.
///
/// CORS settings come from the configuration carried by `state`.
pub fn build_app(state: AppState) -> Router {
    let cors = build_cors_layer(&state.config.server.cors);

    build_router(state)
        .layer(build_compression_layer())
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .layer(axum_middleware::from_fn(request_logging))
}

/// Builds the store for a fresh process, seeded when configured.
pub fn build_store(config: &AppConfig) -> VideoStore {
    if config.seed.enabled {
        VideoStore::with_videos(demo_videos())
    } else {
        VideoStore::new()
    }
}

/// The demo catalogue loaded when seeding is enabled.
pub fn demo_videos() -> Vec<NewVideo> {
    let now = Utc::now();
    let mut mock = NewVideo::created_at(
        "Mock video".to_string(),
        "Mark Zuck".to_string(),
        vec![Resolution::P144, Resolution::P360, Resolution::P1080],
        now,
    );
    mock.can_be_downloaded = true;
    mock.publication_date = mock.created_at.clone();
    vec![mock]
}

/// Runs the VideoHub server until Ctrl-C.
pub async fn run_server(config: AppConfig) -> AppResult<()> {
    tracing::info!("Starting VideoHub server...");

    let store = Arc::new(build_store(&config));
    tracing::info!(videos = store.count().await, "Video store ready");

    let address = config.server.bind_address();
    let state = AppState::new(config, store);
    let app = build_app(state);

    let listener = tokio::net::TcpListener::bind(&address)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {address}: {e}")))?;

    tracing::info!("Video api listening on {}", address);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("VideoHub server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
