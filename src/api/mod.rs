//! HTTP layer: translates requests into store operations and store results
//! into responses.
//!
//! # Modules
//!
//! - [`dto`] - Request bodies and the response envelope
//! - [`handlers`] - HTTP request handlers
//! - [`middleware`] - Request id, access logging, and panic recovery
//! - [`routes`] - API route table

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
