//! HTTP middleware wrapped around the router.
//!
//! Provides request id tagging, access logging, and panic recovery.

pub mod recovery;
pub mod request_id;
pub mod tracing;
