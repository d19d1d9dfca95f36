//! # videohub-core
//!
//! Core crate for VideoHub. Contains configuration schemas, the field-level
//! validation error record, and the unified error system together with
//! its mapping onto HTTP responses.
//!
//! This crate has **no** internal dependencies on other VideoHub crates.

pub mod config;
pub mod error;
pub mod result;
pub mod types;

pub use error::AppError;
pub use result::AppResult;
pub use types::FieldError;
