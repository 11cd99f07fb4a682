//! Domain layer: the short link entity and the errors its store can raise.
//!
//! # Modules
//!
//! - [`entities`] - Domain entities
//! - [`errors`] - Store-level failures

pub mod entities;
pub mod errors;

pub use entities::Link;
pub use errors::StoreError;
