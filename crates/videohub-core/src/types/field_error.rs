//! Field-level validation diagnostics.

use serde::{Deserialize, Serialize};

/// A single rejected attribute in an inbound payload.
///
/// Serialized as `{ "message": "...", "field": "..." }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    /// Human-readable reason.
    pub message: String,
    /// The payload key that failed, in its wire spelling.
    pub field: String,
}

impl FieldError {
    /// Create a field error with an explicit message.
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            field: field.into(),
        }
    }

    /// Create the conventional `"<field> is incorrect"` error.
    pub fn incorrect(field: &str) -> Self {
        Self::new(field, format!("{field} is incorrect"))
    }
}
