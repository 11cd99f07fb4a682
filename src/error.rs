//! HTTP-facing error type.
//!
//! Every variant maps to one documented response; none of them is fatal to
//! the process.

use axum::{
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use tracing::error;

use crate::api::dto::envelope::Envelope;
use crate::domain::StoreError;

/// Body sent for every internal failure. Built by hand so that producing it
/// can never fail.
pub(crate) const INTERNAL_ERROR_BODY: &str = r#"{"error":"something went wrong"}"#;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// The request body could not be decoded.
    #[error("invalid body")]
    InvalidBody,

    /// The submitted URL failed validation.
    #[error("invalid url passed")]
    InvalidUrl,

    /// The short code is unknown.
    #[error("url not found")]
    NotFound,

    /// The response envelope could not be encoded.
    #[error("failed to serialize response: {0}")]
    Serialization(String),
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::InvalidUrl(_) => Self::InvalidUrl,
            StoreError::NotFound(_) => Self::NotFound,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let message = self.to_string();

        match self {
            AppError::InvalidBody => {
                Envelope::error(StatusCode::UNPROCESSABLE_ENTITY, message).into_response()
            }
            AppError::InvalidUrl => Envelope::error(StatusCode::BAD_REQUEST, message).into_response(),
            AppError::NotFound => (StatusCode::NOT_FOUND, message).into_response(),
            AppError::Serialization(reason) => {
                error!(error = %reason, "Failed to marshal json data");
                internal_error_response()
            }
        }
    }
}

/// Generic 500 response that leaks no internal detail.
pub(crate) fn internal_error_response() -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        [(header::CONTENT_TYPE, "application/json")],
        INTERNAL_ERROR_BODY,
    )
        .into_response()
}
