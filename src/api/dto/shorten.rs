//! DTOs for link shortening endpoint.

use serde::Deserialize;

/// Request to shorten a single URL.
#[derive(Debug, Deserialize)]
pub struct ShortenRequest {
    /// The URL to shorten. Must parse as an absolute URL.
    pub url: String,
}
