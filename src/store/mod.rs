//! In-memory storage of short links.
//!
//! - [`code_store`] - The synchronized code-to-URL map
//! - [`random`] - Injectable randomness used for code generation

pub mod code_store;
pub mod random;

pub use code_store::CodeStore;
#[cfg(test)]
pub use random::MockRandomSource;
pub use random::{RandomSource, RngSource};
