//! Target URL validation and `Location` rendering.
//!
//! Targets are stored verbatim, so validation only decides whether the input
//! parses as an absolute URL. No canonicalization is applied.

use percent_encoding::{CONTROLS, utf8_percent_encode};
use url::Url;

use crate::domain::StoreError;

/// Checks that `input` is a syntactically valid absolute URL.
///
/// # Errors
///
/// Returns [`StoreError::InvalidUrl`] carrying the parser's reason when the
/// input is empty, relative, or otherwise malformed. Control characters are
/// rejected as well: the parser silently strips tabs and newlines, but the
/// stored target is later sent verbatim in a `Location` header.
///
/// # Examples
///
/// ```ignore
/// assert!(validate_target("https://example.com/path?q=1").is_ok());
/// assert!(validate_target("not a url").is_err());
/// ```
pub fn validate_target(input: &str) -> Result<(), StoreError> {
    if input.chars().any(|c| c.is_ascii_control()) {
        return Err(StoreError::InvalidUrl(
            "control characters are not allowed".to_string(),
        ));
    }

    Url::parse(input)
        .map(|_| ())
        .map_err(|e| StoreError::InvalidUrl(e.to_string()))
}

/// Renders a stored target for the `Location` header.
///
/// Bytes outside ASCII are percent-encoded so the header stays ASCII; every
/// other character, including existing `%XX` escapes, is kept as is.
///
/// ```ignore
/// assert_eq!(
///     location_value("https://bücher.example/straße"),
///     "https://b%C3%BCcher.example/stra%C3%9Fe"
/// );
/// ```
pub fn location_value(target: &str) -> String {
    utf8_percent_encode(target, CONTROLS).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_https_url() {
        assert!(validate_target("https://example.com").is_ok());
    }

    #[test]
    fn test_accepts_query_and_fragment() {
        assert!(validate_target("http://example.com:8080/a/b?x=1&y=2#frag").is_ok());
    }

    #[test]
    fn test_accepts_other_schemes() {
        assert!(validate_target("ftp://files.example.com/pub").is_ok());
        assert!(validate_target("mailto:someone@example.com").is_ok());
    }

    #[test]
    fn test_rejects_plain_words() {
        let err = validate_target("not a url").unwrap_err();
        assert!(matches!(err, StoreError::InvalidUrl(_)));
    }

    #[test]
    fn test_rejects_empty_string() {
        assert!(validate_target("").is_err());
    }

    #[test]
    fn test_rejects_relative_path() {
        assert!(validate_target("/just/a/path").is_err());
    }

    #[test]
    fn test_rejects_invalid_port() {
        assert!(validate_target("http://example.com:99999/").is_err());
    }

    #[test]
    fn test_rejects_embedded_newline() {
        assert!(validate_target("https://example.com/\nLocation: evil").is_err());
        assert!(validate_target("https://exa\tmple.com").is_err());
    }

    #[test]
    fn test_accepts_non_ascii_host() {
        assert!(validate_target("https://bücher.example/straße").is_ok());
    }

    #[test]
    fn test_error_carries_reason() {
        let err = validate_target("example.com").unwrap_err();
        assert!(err.to_string().starts_with("invalid url"));
    }

    #[test]
    fn test_location_value_escapes_non_ascii() {
        let location = location_value("https://bücher.example/straße");

        assert_eq!(location, "https://b%C3%BCcher.example/stra%C3%9Fe");
        assert!(location.is_ascii());
    }

    #[test]
    fn test_location_value_keeps_ascii_untouched() {
        let target = "https://example.com/a%20b?q=1&r=two#frag";

        assert_eq!(location_value(target), target);
    }
}
