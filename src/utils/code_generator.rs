//! Short code generation and validation utilities.
//!
//! Auto-generated codes are 7 characters drawn from `[a-zA-Z0-9]`, a space of
//! 62^7 ≈ 3.5×10^12 candidates. The generator makes no uniqueness promise of
//! its own; the creation flow reacts to the store's duplicate-key signal and
//! retries within a fixed budget.

use crate::error::AppError;
use rand::{Rng, distr::Alphanumeric};
use regex::Regex;
use serde_json::json;
use std::sync::LazyLock;

/// Length of auto-generated codes.
pub const GENERATED_CODE_LENGTH: usize = 7;

/// Additional generation attempts after the first duplicate-key collision.
pub const COLLISION_RETRY_BUDGET: usize = 4;

/// Pattern for caller-supplied codes.
static CUSTOM_CODE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z0-9]{3,32}$").unwrap());

/// Generates a random candidate short code.
///
/// Collision resistance comes from the size of the code space, not from
/// cryptographic strength; uniqueness is enforced by the store's unique
/// constraint.
pub fn generate_code() -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(GENERATED_CODE_LENGTH)
        .map(char::from)
        .collect()
}

/// Validates a caller-supplied short code.
///
/// # Rules
///
/// - Length: 3-32 characters
/// - Allowed characters: ASCII letters and digits
///
/// # Errors
///
/// Returns [`AppError::InvalidShortcode`] if the code does not match.
pub fn validate_custom_code(code: &str) -> Result<(), AppError> {
    if !CUSTOM_CODE_REGEX.is_match(code) {
        return Err(AppError::invalid_shortcode(
            "Invalid 'shortcode'. Use 3-32 alphanumeric characters.",
            json!({ "shortcode": code }),
        ));
    }

    Ok(())
}
