//! Errors raised by the code store.

/// Failure of a [`crate::store::CodeStore`] operation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// The target could not be parsed as an absolute URL.
    #[error("invalid url: {0}")]
    InvalidUrl(String),

    /// No mapping exists for the requested code.
    #[error("code not found: {0}")]
    NotFound(String),
}
