//! Handler for health check endpoint.

use axum::{extract::State, http::StatusCode, response::IntoResponse};

use crate::api::dto::envelope::Envelope;
use crate::api::dto::health::HealthResponse;
use crate::state::AppState;

/// Reports liveness and the number of stored links.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Response
///
/// ```json
/// { "data": { "status": "ok", "version": "0.1.0", "links": 42 } }
/// ```
pub async fn health_handler(State(state): State<AppState>) -> impl IntoResponse {
    Envelope::data(
        StatusCode::OK,
        HealthResponse {
            status: "ok",
            version: env!("CARGO_PKG_VERSION"),
            links: state.store.len(),
        },
    )
}
