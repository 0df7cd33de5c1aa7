//! JSON body extractor with provider-style rejections.

use axum::{
    async_trait,
    body::Bytes,
    extract::{FromRequest, Request},
};
use serde::de::DeserializeOwned;

use crate::errors::AppError;
use crate::types::StatusOnly;

/// JSON extractor that ignores the request content type and rejects
/// unreadable or undecodable bodies with `503` and no body.
pub struct JsonBody<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for JsonBody<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = StatusOnly;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|e| AppError::malformed(e.body_text()))?;

        let value = serde_json::from_slice(&bytes).map_err(|e| AppError::malformed(e.to_string()))?;

        Ok(JsonBody(value))
    }
}
