//! Video resource lifecycle: list, create, read, merge-update, delete.

use std::sync::Arc;

use chrono::Utc;
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, info};

use videohub_core::error::AppError;
use videohub_core::result::AppResult;
use videohub_entity::video::{NewVideo, Resolution, Video, VideoId, VideoUpdate};
use videohub_store::VideoStore;

use super::validation::VideoValidator;

/// Orchestrates validation and store mutation for videos.
#[derive(Debug, Clone)]
pub struct VideoService {
    /// Video store.
    store: Arc<VideoStore>,
    /// Payload validator.
    validator: VideoValidator,
}

/// Typed view of an accepted create payload.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CreateVideoRequest {
    title: String,
    author: String,
    #[serde(default)]
    available_resolutions: Option<Vec<Resolution>>,
}

impl VideoService {
    /// Creates a new video service.
    pub fn new(store: Arc<VideoStore>, validator: VideoValidator) -> Self {
        Self { store, validator }
    }

    /// Lists every stored video.
    pub async fn list_videos(&self) -> Vec<Video> {
        self.store.list().await
    }

    /// Gets a video by ID.
    pub async fn get_video(&self, id: VideoId) -> AppResult<Video> {
        self.store
            .find_by_id(id)
            .await
            .ok_or_else(|| AppError::not_found(format!("Video {id} not found")))
    }

    /// Validates `payload` and stores a new video built from it.
    pub async fn create_video(&self, payload: &Value) -> AppResult<Video> {
        let errors = self.validator.validate_create(payload);
        if !errors.is_empty() {
            debug!(errors = errors.len(), "Rejected video create payload");
            return Err(AppError::invalid_fields(errors));
        }

        let req: CreateVideoRequest = serde_json::from_value(payload.clone())?;
        let draft = NewVideo::created_at(
            req.title,
            req.author,
            req.available_resolutions.unwrap_or_default(),
            Utc::now(),
        );

        let video = self.store.append(draft).await;
        info!(video_id = video.id, title = %video.title, "Video created");

        Ok(video)
    }

    /// Merges the fields present in `payload` into an existing video.
    ///
    /// The id is resolved before the payload is looked at, so an unknown id
    /// is reported as not found even when the payload is also invalid. The
    /// merge itself runs under the store's write lock, so concurrent updates
    /// to different fields of one video all survive.
    pub async fn update_video(&self, id: VideoId, payload: &Value) -> AppResult<()> {
        self.get_video(id).await?;

        let errors = self.validator.validate_update(payload);
        if !errors.is_empty() {
            debug!(video_id = id, errors = errors.len(), "Rejected video update payload");
            return Err(AppError::invalid_fields(errors));
        }

        let update: VideoUpdate = match payload {
            Value::Object(_) => serde_json::from_value(payload.clone())?,
            _ => VideoUpdate::default(),
        };
        if update.is_empty() {
            debug!(video_id = id, "Video update carries no changes");
            return Ok(());
        }

        self.store
            .update(id, |video| update.apply_to(video))
            .await
            .ok_or_else(|| AppError::not_found(format!("Video {id} not found")))?;

        info!(video_id = id, "Video updated");
        Ok(())
    }

    /// Deletes a video by ID.
    pub async fn delete_video(&self, id: VideoId) -> AppResult<()> {
        if !self.store.remove_by_id(id).await {
            return Err(AppError::not_found(format!("Video {id} not found")));
        }

        info!(video_id = id, "Video deleted");
        Ok(())
    }

    /// Removes every video.
    pub async fn delete_all_videos(&self) {
        let removed = self.store.clear().await;
        info!(removed, "All videos deleted");
    }
}
