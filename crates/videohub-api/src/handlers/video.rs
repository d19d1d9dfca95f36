//! Video CRUD handlers.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;

use videohub_core::result::AppResult;
use videohub_entity::video::Video;

use crate::extractors::{JsonPayload, parse_video_id};
use crate::state::AppState;

/// GET /videos
pub async fn list_videos(State(state): State<AppState>) -> Json<Vec<Video>> {
    Json(state.video_service.list_videos().await)
}

/// POST /videos
pub async fn create_video(
    State(state): State<AppState>,
    JsonPayload(payload): JsonPayload,
) -> AppResult<(StatusCode, Json<Video>)> {
    let video = state.video_service.create_video(&payload).await?;
    Ok((StatusCode::CREATED, Json(video)))
}

/// GET /videos/{id}
pub async fn get_video(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Video>> {
    let id = parse_video_id(&id)?;
    let video = state.video_service.get_video(id).await?;
    Ok(Json(video))
}

/// PUT /videos/{id}
pub async fn update_video(
    State(state): State<AppState>,
    Path(id): Path<String>,
    JsonPayload(payload): JsonPayload,
) -> AppResult<StatusCode> {
    let id = parse_video_id(&id)?;
    state.video_service.update_video(id, &payload).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /videos/{id}
pub async fn delete_video(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<StatusCode> {
    let id = parse_video_id(&id)?;
    state.video_service.delete_video(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
