//! # videohub-service
//!
//! Business logic service layer for VideoHub. The video service validates
//! inbound payloads and drives the store through the create / update /
//! delete lifecycle.
//!
//! Services follow constructor injection: the store is provided at
//! construction time via an `Arc` reference.

pub mod video;

pub use video::{VideoService, VideoValidator};
