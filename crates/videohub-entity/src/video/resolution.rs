//! Video resolution enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Supported playback qualities.
///
/// The wire form is the exact tag (`"P720"`); matching is case-sensitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Resolution {
    /// 144p.
    P144,
    /// 240p.
    P240,
    /// 360p.
    P360,
    /// 480p.
    P480,
    /// 720p.
    P720,
    /// 1080p.
    P1080,
    /// 1440p.
    P1440,
    /// 2160p (4K).
    P2160,
}

impl Resolution {
    /// Every supported resolution, lowest first.
    pub const ALL: [Resolution; 8] = [
        Self::P144,
        Self::P240,
        Self::P360,
        Self::P480,
        Self::P720,
        Self::P1080,
        Self::P1440,
        Self::P2160,
    ];

    /// Return the wire tag.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::P144 => "P144",
            Self::P240 => "P240",
            Self::P360 => "P360",
            Self::P480 => "P480",
            Self::P720 => "P720",
            Self::P1080 => "P1080",
            Self::P1440 => "P1440",
            Self::P2160 => "P2160",
        }
    }

    /// Check whether `tag` names a supported resolution.
    pub fn is_known(tag: &str) -> bool {
        tag.parse::<Self>().is_ok()
    }
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Resolution {
    type Err = videohub_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|r| r.as_str() == s)
            .ok_or_else(|| {
                videohub_core::AppError::validation(format!("Invalid resolution: '{s}'"))
            })
    }
}
