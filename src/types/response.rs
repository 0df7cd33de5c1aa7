//! Response helpers for the provider endpoints.
//!
//! The login and setup endpoints answer failures with a bare status code
//! and no body, which is what recorded contracts expect.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::errors::AppError;

/// Error rendered as its status code with an empty body
#[derive(Debug)]
pub struct StatusOnly(pub AppError);

impl From<AppError> for StatusOnly {
    fn from(err: AppError) -> Self {
        StatusOnly(err)
    }
}

impl IntoResponse for StatusOnly {
    fn into_response(self) -> Response {
        let status = self.0.status();
        if status.is_server_error() {
            tracing::warn!(code = self.0.code(), "{}", self.0);
        } else {
            tracing::debug!(code = self.0.code(), "{}", self.0);
        }
        status.into_response()
    }
}

/// Result type for handlers that answer with empty bodies on failure
pub type ProviderResult<T> = Result<T, StatusOnly>;

/// Successful response with no body
pub struct Empty;

impl IntoResponse for Empty {
    fn into_response(self) -> Response {
        StatusCode::OK.into_response()
    }
}
