//! Payload validation strictness policy.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Controls how strictly inbound video payloads are checked.
///
/// With the defaults, titles and authors are length-limited and
/// timestamps only need to be strings.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ValidationConfig {
    /// Reject titles and authors longer than their configured maximum.
    #[serde(default = "default_true")]
    pub enforce_length_limits: bool,
    /// Maximum title length in characters.
    #[serde(default = "default_title_max_length")]
    #[validate(range(min = 1))]
    pub title_max_length: u64,
    /// Maximum author length in characters.
    #[serde(default = "default_author_max_length")]
    #[validate(range(min = 1))]
    pub author_max_length: u64,
    /// Require `createdAt`/`publicationDate` to be canonical ISO-8601
    /// timestamps (`YYYY-MM-DDTHH:MM:SS.sssZ`) instead of any string.
    #[serde(default)]
    pub strict_dates: bool,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            enforce_length_limits: true,
            title_max_length: default_title_max_length(),
            author_max_length: default_author_max_length(),
            strict_dates: false,
        }
    }
}

impl ValidationConfig {
    /// Policy with no length limits and plain-string timestamps.
    pub fn lenient() -> Self {
        Self {
            enforce_length_limits: false,
            strict_dates: false,
            ..Self::default()
        }
    }

    /// Policy with length limits and canonical timestamps.
    pub fn strict() -> Self {
        Self {
            enforce_length_limits: true,
            strict_dates: true,
            ..Self::default()
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_title_max_length() -> u64 {
    40
}

fn default_author_max_length() -> u64 {
    20
}
