//! Convenience result type alias for VideoHub.

use crate::error::AppError;

/// A specialized `Result` type for VideoHub operations.
pub type AppResult<T> = Result<T, AppError>;
