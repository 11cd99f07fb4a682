//! Handler for short URL redirect.

use axum::{
    extract::{Path, State, rejection::PathRejection},
    response::{IntoResponse, Redirect},
};
use tracing::debug;

use crate::error::AppError;
use crate::state::AppState;
use crate::utils::code_generator::is_valid_code;
use crate::utils::url_validator::location_value;

/// Redirects a short code to its original URL.
///
/// # Endpoint
///
/// `GET /{code}`
///
/// # Response
///
/// `308 Permanent Redirect` with `Location` set to the stored target, with
/// non-ASCII bytes percent-encoded. The mapping never changes, so clients
/// may cache the redirect.
///
/// # Errors
///
/// Returns 404 with the plain-text body `url not found` if the code was
/// never issued. Segments that do not decode to UTF-8 or cannot be a
/// generated code get the same answer without touching the store.
pub async fn redirect_handler(
    State(state): State<AppState>,
    code: Result<Path<String>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(code) = code.map_err(|rejection| {
        debug!(reason = %rejection.body_text(), "Undecodable short code");
        AppError::NotFound
    })?;

    if !is_valid_code(&code) {
        debug!(code = %code, "Malformed short code");
        return Err(AppError::NotFound);
    }

    let link = state.store.resolve(&code).inspect_err(|_| {
        debug!(code = %code, "Unknown short code");
    })?;

    Ok(Redirect::permanent(&location_value(&link.target)))
}
