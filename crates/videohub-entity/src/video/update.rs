//! Sparse video update.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer};

use super::model::Video;
use super::resolution::Resolution;

/// Fields to overwrite on an existing video; `None` keeps the stored value.
///
/// `min_age_restriction` is doubly optional so that an explicit `null`
/// (clear the restriction) is distinct from an absent key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoUpdate {
    /// New title.
    #[serde(default)]
    pub title: Option<String>,
    /// New author.
    #[serde(default)]
    pub author: Option<String>,
    /// New resolution list.
    #[serde(default)]
    pub available_resolutions: Option<Vec<Resolution>>,
    /// New download flag.
    #[serde(default)]
    pub can_be_downloaded: Option<bool>,
    /// New age restriction.
    #[serde(default, deserialize_with = "present_age")]
    pub min_age_restriction: Option<Option<u8>>,
    /// New creation timestamp.
    #[serde(default)]
    pub created_at: Option<String>,
    /// New publication timestamp.
    #[serde(default)]
    pub publication_date: Option<String>,
}

impl VideoUpdate {
    /// Overwrite every present field on `video`.
    pub fn apply_to(self, video: &mut Video) {
        if let Some(title) = self.title {
            video.title = title;
        }
        if let Some(author) = self.author {
            video.author = author;
        }
        if let Some(resolutions) = self.available_resolutions {
            video.available_resolutions = resolutions;
        }
        if let Some(can_be_downloaded) = self.can_be_downloaded {
            video.can_be_downloaded = can_be_downloaded;
        }
        if let Some(min_age_restriction) = self.min_age_restriction {
            video.min_age_restriction = min_age_restriction;
        }
        if let Some(created_at) = self.created_at {
            video.created_at = created_at;
        }
        if let Some(publication_date) = self.publication_date {
            video.publication_date = publication_date;
        }
    }

    /// Whether the update changes nothing.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Convert a JSON number to an age when it is whole and fits in a `u8`.
///
/// Integral floats such as `18.0` count as whole.
pub fn whole_age(n: f64) -> Option<u8> {
    (n.fract() == 0.0 && (0.0..=f64::from(u8::MAX)).contains(&n)).then_some(n as u8)
}

/// Marks the age key as present even when its value is `null`.
fn present_age<'de, D>(deserializer: D) -> Result<Option<Option<u8>>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<f64>::deserialize(deserializer)?
        .map(|n| whole_age(n).ok_or_else(|| D::Error::custom(format!("invalid age: {n}"))))
        .transpose()
        .map(Some)
}
