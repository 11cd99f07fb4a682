//! Short code alphabet, generation, and shape checks.

use crate::store::RandomSource;

/// Characters a generated code is drawn from.
pub const ALPHABET: &[u8; 62] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Number of characters in every generated code.
pub const CODE_LENGTH: usize = 8;

/// Draws a candidate short code from `source`.
///
/// Each of the [`CODE_LENGTH`] characters is an independent uniform draw
/// from [`ALPHABET`]. The result is only a candidate: uniqueness is checked
/// by the store that owns the mappings.
///
/// # Panics
///
/// Panics if `source` returns an index outside `0..ALPHABET.len()`.
pub fn generate_code(source: &mut dyn RandomSource) -> String {
    (0..CODE_LENGTH)
        .map(|_| ALPHABET[source.pick(ALPHABET.len())] as char)
        .collect()
}

/// Returns true if `code` has the shape of a generated code.
///
/// The redirect handler uses it to answer malformed codes without a store
/// lookup; the store itself simply reports unknown codes as not found.
pub fn is_valid_code(code: &str) -> bool {
    code.len() == CODE_LENGTH && code.bytes().all(|b| ALPHABET.contains(&b))
}
