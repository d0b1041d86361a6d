//! US postal code shape checks, applied before any network lookup.

use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

static ZIP_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{5}(-\d{4})?$").expect("valid zip regex"));

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PostalCodeError {
    #[error("postal code is empty")]
    Empty,

    #[error("'{0}' is not a 5-digit US zip code (optionally ZIP+4)")]
    Malformed(String),
}

/// Trim and validate a US zip code (`12345` or `12345-6789`).
///
/// # Errors
///
/// Returns [`PostalCodeError`] when the trimmed input is empty or malformed.
pub fn validate_postal_code(raw: &str) -> Result<String, PostalCodeError> {
    let code = raw.trim();
    if code.is_empty() {
        return Err(PostalCodeError::Empty);
    }
    if !ZIP_RE.is_match(code) {
        return Err(PostalCodeError::Malformed(code.to_string()));
    }
    Ok(code.to_string())
}

/// The 5-digit prefix of a validated zip code; lookups are keyed on it.
#[must_use]
pub fn zip5(code: &str) -> &str {
    code.split('-').next().unwrap_or(code)
}
