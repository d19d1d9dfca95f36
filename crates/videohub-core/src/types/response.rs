//! Error response bodies returned by the HTTP layer.

use serde::{Deserialize, Serialize};

use super::field_error::FieldError;

/// Body of a 400 response caused by rejected payload fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationErrorResponse {
    /// Rejected fields, in validation order.
    pub errors_messages: Vec<FieldError>,
}

/// Generic error body for failures without field diagnostics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorResponse {
    /// Machine-readable error code.
    pub error: String,
    /// Human-readable message.
    pub message: String,
}
