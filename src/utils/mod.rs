//! Helpers shared by the store and the HTTP layer.
//!
//! - [`code_generator`] - Short code alphabet and generation
//! - [`url_validator`] - Target URL validation

pub mod code_generator;
pub mod url_validator;
