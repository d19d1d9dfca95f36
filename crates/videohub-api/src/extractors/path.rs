//! Typed path parameter helpers.

use videohub_core::error::AppError;
use videohub_core::result::AppResult;
use videohub_entity::video::VideoId;

/// Parses a video id from a path segment.
///
/// Anything that is not a non-negative integer cannot name a stored video,
/// so it is reported as not found.
pub fn parse_video_id(s: &str) -> AppResult<VideoId> {
    s.parse::<VideoId>()
        .map_err(|_| AppError::not_found(format!("Video {s} not found")))
}
