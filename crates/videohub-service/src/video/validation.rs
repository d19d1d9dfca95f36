//! Field-level validation of raw video payloads.
//!
//! Payloads are inspected as untyped JSON so that a wrong type is reported
//! as a field error instead of a deserialization failure. Errors come back
//! in the fixed field order of the operation, at most one per field.

use chrono::{DateTime, Utc};
use serde_json::Value;

use videohub_core::config::validation::ValidationConfig;
use videohub_core::types::FieldError;
use videohub_entity::video::{Resolution, iso_timestamp, whole_age};

/// Allowed range for `minAgeRestriction`.
const MIN_AGE_RANGE: std::ops::RangeInclusive<u8> = 1..=18;

/// A validated video attribute, in its wire spelling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VideoField {
    Title,
    Author,
    AvailableResolutions,
    CanBeDownloaded,
    MinAgeRestriction,
    CreatedAt,
    PublicationDate,
}

impl VideoField {
    /// Fields checked when creating a video.
    pub const CREATE: [VideoField; 3] = [Self::Title, Self::Author, Self::AvailableResolutions];

    /// Fields checked when updating a video.
    pub const UPDATE: [VideoField; 7] = [
        Self::Title,
        Self::Author,
        Self::AvailableResolutions,
        Self::CanBeDownloaded,
        Self::MinAgeRestriction,
        Self::CreatedAt,
        Self::PublicationDate,
    ];

    /// Return the JSON key.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Author => "author",
            Self::AvailableResolutions => "availableResolutions",
            Self::CanBeDownloaded => "canBeDownloaded",
            Self::MinAgeRestriction => "minAgeRestriction",
            Self::CreatedAt => "createdAt",
            Self::PublicationDate => "publicationDate",
        }
    }
}

/// Checks create/update payloads against the configured strictness policy.
#[derive(Debug, Clone, Default)]
pub struct VideoValidator {
    config: ValidationConfig,
}

impl VideoValidator {
    /// Creates a validator with the given policy.
    pub fn new(config: ValidationConfig) -> Self {
        Self { config }
    }

    /// Validate a create payload. Title and author are mandatory.
    pub fn validate_create(&self, payload: &Value) -> Vec<FieldError> {
        self.validate_fields(&VideoField::CREATE, payload, |field| {
            matches!(field, VideoField::Title | VideoField::Author)
        })
    }

    /// Validate an update payload. Every field is optional.
    pub fn validate_update(&self, payload: &Value) -> Vec<FieldError> {
        self.validate_fields(&VideoField::UPDATE, payload, |_| false)
    }

    fn validate_fields(
        &self,
        fields: &[VideoField],
        payload: &Value,
        required: impl Fn(VideoField) -> bool,
    ) -> Vec<FieldError> {
        fields
            .iter()
            .filter(|field| match payload.get(field.as_str()) {
                None => required(**field),
                Some(value) => !self.is_valid(**field, value),
            })
            .map(|field| FieldError::incorrect(field.as_str()))
            .collect()
    }

    fn is_valid(&self, field: VideoField, value: &Value) -> bool {
        match field {
            VideoField::Title => self.is_valid_text(value, self.config.title_max_length),
            VideoField::Author => self.is_valid_text(value, self.config.author_max_length),
            VideoField::AvailableResolutions => value.as_array().is_some_and(|items| {
                items
                    .iter()
                    .all(|item| item.as_str().is_some_and(Resolution::is_known))
            }),
            VideoField::CanBeDownloaded => value.is_boolean(),
            VideoField::MinAgeRestriction => {
                value.is_null()
                    || value
                        .as_f64()
                        .and_then(whole_age)
                        .is_some_and(|age| MIN_AGE_RANGE.contains(&age))
            }
            VideoField::CreatedAt | VideoField::PublicationDate => {
                value.as_str().is_some_and(|s| self.is_valid_timestamp(s))
            }
        }
    }

    /// Lengths are counted in UTF-16 code units, so an emoji outside the
    /// basic plane counts twice.
    fn is_valid_text(&self, value: &Value, max_length: u64) -> bool {
        match value.as_str() {
            Some(text) if self.config.enforce_length_limits => {
                text.encode_utf16().count() as u64 <= max_length
            }
            Some(_) => true,
            None => false,
        }
    }

    fn is_valid_timestamp(&self, text: &str) -> bool {
        if !self.config.strict_dates {
            return true;
        }
        DateTime::parse_from_rfc3339(text)
            .is_ok_and(|parsed| iso_timestamp(parsed.with_timezone(&Utc)) == text)
    }
}
