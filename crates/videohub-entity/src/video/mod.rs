//! Video domain entities.

pub mod model;
pub mod resolution;
pub mod update;

pub use model::{NewVideo, Video, VideoId, iso_timestamp};
pub use resolution::Resolution;
pub use update::{VideoUpdate, whole_age};
