//! JSON body extractor that validates against an `InputSchema` before the handler runs.

use crate::error::AppError;
use crate::service::{InputSchema, RequestValidator};
use async_trait::async_trait;
use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
    http::StatusCode,
};
use serde_json::Value;

/// Typed, validated write payload. Rejections become `AppError` so every client error shares
/// the `{success, code, message}` body. The content type is not checked.
#[derive(Clone, Debug)]
pub struct Payload<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for Payload<T>
where
    S: Send + Sync,
    T: InputSchema,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state).await.map_err(|e| {
            if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
                AppError::PayloadTooLarge(e.body_text())
            } else {
                AppError::BadRequest(e.body_text())
            }
        })?;
        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Err(AppError::BadRequest("No data provided".into()));
        }
        let value: Value = serde_json::from_slice(&bytes)
            .map_err(|e| AppError::BadRequest(format!("body is not valid JSON: {}", e)))?;
        RequestValidator::parse(value).map(Payload)
    }
}
