//! Core type definitions used across the VideoHub workspace.

pub mod field_error;
pub mod response;

pub use field_error::FieldError;
pub use response::{ApiErrorResponse, ValidationErrorResponse};
