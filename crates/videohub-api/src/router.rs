//! Route definitions for the VideoHub HTTP API.
//!
//! The router receives `AppState` and passes it to all handlers via Axum's
//! `State` extractor.

use axum::{
    Router,
    routing::{delete, get},
};

use crate::handlers;
use crate::state::AppState;

/// Build the Axum router with every route, without middleware.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .merge(video_routes())
        .merge(testing_routes())
        .with_state(state)
}

/// Video CRUD
fn video_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/videos",
            get(handlers::video::list_videos).post(handlers::video::create_video),
        )
        .route(
            "/videos/{id}",
            get(handlers::video::get_video)
                .put(handlers::video::update_video)
                .delete(handlers::video::delete_video),
        )
}

/// Test-support reset
fn testing_routes() -> Router<AppState> {
    Router::new().route("/testing/all-data", delete(handlers::testing::delete_all_data))
}
