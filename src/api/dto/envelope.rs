//! JSON response envelope shared by all JSON-producing routes.

use axum::{
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use serde::Serialize;

use crate::error::AppError;

/// Wire shape of every JSON response: `{"error": ...}` or `{"data": ...}`.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

/// An [`ApiResponse`] paired with the status it is sent with.
///
/// Encoding happens in [`IntoResponse`]; if it fails the caller gets a
/// generic 500 instead of the intended body.
#[derive(Debug)]
pub struct Envelope<T> {
    status: StatusCode,
    body: ApiResponse<T>,
}

impl<T: Serialize> Envelope<T> {
    pub fn data(status: StatusCode, data: T) -> Self {
        Self {
            status,
            body: ApiResponse {
                error: None,
                data: Some(data),
            },
        }
    }
}

impl Envelope<()> {
    pub fn error(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            body: ApiResponse {
                error: Some(message.into()),
                data: None,
            },
        }
    }
}

impl<T: Serialize> IntoResponse for Envelope<T> {
    fn into_response(self) -> Response {
        match serde_json::to_vec(&self.body) {
            Ok(bytes) => (
                self.status,
                [(header::CONTENT_TYPE, "application/json")],
                bytes,
            )
                .into_response(),
            Err(e) => AppError::Serialization(e.to_string()).into_response(),
        }
    }
}
