//! DTOs for health check endpoint.

use serde::Serialize;

/// Service status reported by `GET /health`.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    /// Number of short links currently held in memory.
    pub links: usize,
}
