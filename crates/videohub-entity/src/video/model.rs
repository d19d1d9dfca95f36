//! Video entity model.

use chrono::{DateTime, Duration, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use super::resolution::Resolution;

/// Store-assigned video identifier.
pub type VideoId = u64;

/// A stored video.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Video {
    /// Unique identifier, assigned by the store.
    pub id: VideoId,
    /// Video title.
    pub title: String,
    /// Video author.
    pub author: String,
    /// Whether the video may be downloaded.
    pub can_be_downloaded: bool,
    /// Minimum viewer age, `None` for unrestricted.
    pub min_age_restriction: Option<u8>,
    /// Creation timestamp (ISO-8601).
    pub created_at: String,
    /// Publication timestamp (ISO-8601).
    pub publication_date: String,
    /// Available playback qualities, in caller order.
    pub available_resolutions: Vec<Resolution>,
}

impl Video {
    /// Materialize a draft under the given identifier.
    pub fn from_new(id: VideoId, new: NewVideo) -> Self {
        Self {
            id,
            title: new.title,
            author: new.author,
            can_be_downloaded: new.can_be_downloaded,
            min_age_restriction: new.min_age_restriction,
            created_at: new.created_at,
            publication_date: new.publication_date,
            available_resolutions: new.available_resolutions,
        }
    }
}

/// Data required to store a new video; the store assigns the id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewVideo {
    /// Video title.
    pub title: String,
    /// Video author.
    pub author: String,
    /// Whether the video may be downloaded.
    pub can_be_downloaded: bool,
    /// Minimum viewer age.
    pub min_age_restriction: Option<u8>,
    /// Creation timestamp.
    pub created_at: String,
    /// Publication timestamp.
    pub publication_date: String,
    /// Available playback qualities.
    pub available_resolutions: Vec<Resolution>,
}

impl NewVideo {
    /// Build a freshly created video: not downloadable, unrestricted,
    /// published one day after `now`.
    pub fn created_at(
        title: String,
        author: String,
        available_resolutions: Vec<Resolution>,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            title,
            author,
            can_be_downloaded: false,
            min_age_restriction: None,
            created_at: iso_timestamp(now),
            publication_date: iso_timestamp(now + Duration::hours(24)),
            available_resolutions,
        }
    }
}

/// Format a timestamp as `YYYY-MM-DDTHH:MM:SS.sssZ`.
pub fn iso_timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}
