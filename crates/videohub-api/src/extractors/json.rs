//! Raw JSON body extractor.

use axum::body::Bytes;
use axum::extract::{FromRequest, Request};
use serde_json::{Map, Value};

use videohub_core::error::AppError;

/// The request body as untyped JSON.
///
/// Unlike `axum::Json`, this ignores `Content-Type` and treats an empty
/// body as `{}`, so that field-level validation (and the not-found check
/// that precedes it on updates) always gets to run. Only a body that is
/// not JSON at all is rejected here.
#[derive(Debug, Clone)]
pub struct JsonPayload(pub Value);

impl<S> FromRequest<S> for JsonPayload
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|e| AppError::validation(e.body_text()))?;

        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(Self(Value::Object(Map::new())));
        }

        serde_json::from_slice(&bytes)
            .map(Self)
            .map_err(|e| AppError::validation(format!("Malformed JSON body: {e}")))
    }
}
