//! Custom Axum extractors.

pub mod json;
pub mod path;

pub use json::JsonPayload;
pub use path::parse_video_id;
