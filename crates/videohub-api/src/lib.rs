//! # videohub-api
//!
//! HTTP API layer for VideoHub built on Axum.
//!
//! Provides the `/videos` resource endpoints, the `/testing` reset
//! endpoint, middleware (CORS, compression, request logging), the raw JSON
//! payload extractor, and application wiring.

pub mod app;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use app::{build_app, run_server};
pub use state::AppState;
