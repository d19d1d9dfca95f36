//! Test-support handlers.

use axum::extract::State;
use axum::http::StatusCode;

use crate::state::AppState;

/// DELETE /testing/all-data
pub async fn delete_all_data(State(state): State<AppState>) -> StatusCode {
    state.video_service.delete_all_videos().await;
    StatusCode::NO_CONTENT
}
