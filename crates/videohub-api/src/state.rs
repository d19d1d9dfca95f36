//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use videohub_core::config::AppConfig;
use videohub_service::video::{VideoService, VideoValidator};
use videohub_store::VideoStore;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration
    pub config: Arc<AppConfig>,
    /// Video lifecycle service
    pub video_service: Arc<VideoService>,
}

impl AppState {
    /// Wires the service layer on top of `store`.
    pub fn new(config: AppConfig, store: Arc<VideoStore>) -> Self {
        let validator = VideoValidator::new(config.validation.clone());
        let video_service = Arc::new(VideoService::new(store, validator));

        Self {
            config: Arc::new(config),
            video_service,
        }
    }
}
