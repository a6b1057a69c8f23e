//! Destination URL validation.
//!
//! Submitted URLs are stored as-is; validation only checks that the input
//! parses and uses an `http` or `https` scheme. Dangerous schemes like
//! `javascript:` or `data:` are rejected by the scheme allowlist.

use url::Url;

use crate::error::AppError;

/// Validates a destination URL, returning the trimmed input on success.
///
/// # Errors
///
/// Returns [`AppError::Validation`] if the input does not parse as a URL
/// or uses a scheme other than `http`/`https`.
pub fn validate_url(input: &str) -> Result<String, AppError> {
    let trimmed = input.trim();

    let parsed = Url::parse(trimmed).map_err(|_| invalid_format())?;

    match parsed.scheme() {
        "http" | "https" => {}
        _ => return Err(invalid_format()),
    }

    // Url::parse accepts scheme-relative forms like "http:foo"; require a host.
    if parsed.host_str().is_none() {
        return Err(invalid_format());
    }

    Ok(trimmed.to_string())
}

fn invalid_format() -> AppError {
    AppError::bad_request("Invalid URL format. Must start with http:// or https://")
}
