//! # videohub-entity
//!
//! Domain entity models for VideoHub. Every struct in this crate is either
//! a stored entity or a value object used to create or modify one. Only the
//! stored [`video::Video`] travels over the wire in both directions.

pub mod video;
