//! Handler for link shortening endpoint.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};
use tracing::{debug, info};

use crate::api::dto::envelope::Envelope;
use crate::api::dto::shorten::ShortenRequest;
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::url_validator::validate_target;

/// Creates a short code for a long URL.
///
/// # Endpoint
///
/// `POST /api/shorten`
///
/// # Request Body
///
/// ```json
/// { "url": "https://example.com" }
/// ```
///
/// # Response
///
/// `201 Created`
///
/// ```json
/// { "data": "aB3xK9pQ" }
/// ```
///
/// # Errors
///
/// - 422 `{"error":"invalid body"}` if the body is not a JSON object with a
///   string `url` field (including a missing or wrong `Content-Type`)
/// - 400 `{"error":"invalid url passed"}` if `url` is not an absolute URL;
///   no code is issued in that case
pub async fn shorten_handler(
    State(state): State<AppState>,
    payload: Result<Json<ShortenRequest>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload.map_err(|rejection| {
        debug!(reason = %rejection.body_text(), "Rejected shorten body");
        AppError::InvalidBody
    })?;

    if let Err(e) = validate_target(&payload.url) {
        debug!(error = %e, "Rejected shorten url");
        return Err(AppError::InvalidUrl);
    }

    let link = state.store.create(&payload.url)?;
    info!(code = %link.code, "Short link issued");

    Ok(Envelope::data(StatusCode::CREATED, link.code))
}
