//! Short code generation and custom alias validation.

use std::sync::LazyLock;

use rand::Rng;
use regex::Regex;

use crate::error::AppError;

/// URL-safe alphabet used for generated codes: `[A-Za-z0-9_-]`.
const ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789_-";

/// Length of a generated short code.
pub const CODE_LENGTH: usize = 6;

/// Custom aliases: 3-30 characters, letters/digits/hyphen/underscore.
static ALIAS_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_-]{3,30}$").unwrap());

/// Generates a random short code of [`CODE_LENGTH`] characters.
///
/// Samples uniformly from a 64-character URL-safe alphabet, giving a code
/// space of 64^6 (~6.9 * 10^10) for the default length. Collisions are
/// handled by the allocation retry loop, not here.
pub fn generate_code() -> String {
    generate_code_with_length(CODE_LENGTH)
}

/// Generates a random code of the given length from the URL-safe alphabet.
///
/// Used by the allocator's fallback path when short codes keep colliding.
pub fn generate_code_with_length(length: usize) -> String {
    let mut rng = rand::rng();

    (0..length)
        .map(|_| ALPHABET[rng.random_range(0..ALPHABET.len())] as char)
        .collect()
}

/// Validates a user-provided custom alias.
///
/// # Rules
///
/// - Length: 3-30 characters
/// - Allowed characters: letters, digits, hyphens, underscores
///
/// # Errors
///
/// Returns [`AppError::Validation`] if the alias does not match.
pub fn validate_alias(alias: &str) -> Result<(), AppError> {
    if !ALIAS_REGEX.is_match(alias) {
        return Err(AppError::bad_request(
            "Invalid alias format. Use 3-30 characters (letters, numbers, hyphens, underscores only)",
        ));
    }

    Ok(())
}
