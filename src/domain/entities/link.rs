//! Link entity representing a shortened URL mapping.

/// A mapping between a short code and the URL it redirects to.
///
/// Links are created once and never mutated. Values handed out by the store
/// are owned copies; the store keeps the only authoritative entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    pub code: String,
    pub target: String,
}

impl Link {
    /// Creates a new Link instance.
    pub fn new(code: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            target: target.into(),
        }
    }
}
