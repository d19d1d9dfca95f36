//! Video validation and lifecycle.

pub mod service;
pub mod validation;

pub use service::VideoService;
pub use validation::{VideoField, VideoValidator};
