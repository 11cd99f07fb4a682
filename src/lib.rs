//! # memshort
//!
//! A small URL shortening service built with Axum. Links are kept in memory
//! for the lifetime of the process.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - The [`Link`] entity and store errors
//! - **Store** ([`store`]) - Thread-safe code-to-URL map with injectable randomness
//! - **API Layer** ([`api`]) - Handlers, DTOs, and middleware
//! - **Utilities** ([`utils`]) - Code generation and URL validation
//!
//! ## HTTP API
//!
//! - `POST /api/shorten` with `{"url": "..."}` returns `201 {"data": "<code>"}`
//! - `GET /{code}` answers `308` to the stored URL, or `404 url not found`
//! - `GET /health` reports liveness and the number of stored links
//!
//! ## Quick Start
//!
//! ```bash
//! export LISTEN="127.0.0.1:8080"   # Optional
//! cargo run
//!
//! curl -s -XPOST localhost:8080/api/shorten \
//!     -H 'content-type: application/json' \
//!     -d '{"url":"https://example.com"}'
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod domain;
pub mod error;
pub mod state;
pub mod store;
pub mod utils;

pub mod config;
pub mod server;
pub mod telemetry;

pub mod routes;

pub use domain::Link;
pub use error::AppError;
pub use state::AppState;
pub use store::CodeStore;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::domain::{Link, StoreError};
    pub use crate::error::AppError;
    pub use crate::routes::{app_router, router};
    pub use crate::state::AppState;
    pub use crate::store::{CodeStore, RandomSource, RngSource};
}
