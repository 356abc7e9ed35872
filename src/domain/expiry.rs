//! Expiry policy for shortened links.
//!
//! A link's lifetime is specified by the caller in whole minutes and defaults
//! to 30 when absent. The policy is a pure function over the current instant;
//! it enforces no upper bound short of the representable date range.

use chrono::{DateTime, Duration, Utc};
use serde_json::json;

use crate::error::AppError;

/// Default link lifetime in minutes when the caller does not specify one.
pub const DEFAULT_VALIDITY_MINUTES: i64 = 30;

/// Computes the expiry instant for a link created now.
///
/// The validity is taken as a raw JSON number so that non-integer values
/// (`2.5`) are rejected rather than silently truncated. Integer-valued
/// floats (`100.0`, `1e2`) count as integers.
///
/// # Errors
///
/// Returns [`AppError::InvalidValidity`] if the value is present but not a
/// positive integer, or if the resulting instant would fall outside the
/// representable date range.
pub fn compute_expiry(
    validity_minutes: Option<&serde_json::Number>,
) -> Result<DateTime<Utc>, AppError> {
    let minutes = match validity_minutes {
        None => DEFAULT_VALIDITY_MINUTES,
        Some(n) => match integer_minutes(n) {
            Some(m) if m > 0 => m,
            _ => {
                return Err(AppError::invalid_validity(
                    "Invalid 'validity'. Must be a positive integer (minutes).",
                    json!({ "validity": n }),
                ));
            }
        },
    };

    // Checked arithmetic: `Duration::minutes` and `DateTime + Duration` both
    // panic on overflow, and every positive i64 is otherwise valid input.
    Duration::try_minutes(minutes)
        .and_then(|d| Utc::now().checked_add_signed(d))
        .ok_or_else(|| {
            AppError::invalid_validity(
                "Invalid 'validity'. Expiry exceeds the representable date range.",
                json!({ "validity": minutes }),
            )
        })
}

/// Reads a JSON number as whole minutes, treating integer-valued floats as
/// integers the way JavaScript's `Number.isInteger` does.
fn integer_minutes(n: &serde_json::Number) -> Option<i64> {
    if let Some(m) = n.as_i64() {
        return Some(m);
    }

    n.as_f64()
        .filter(|f| f.is_finite() && f.fract() == 0.0)
        .filter(|f| (i64::MIN as f64..=i64::MAX as f64).contains(f))
        .map(|f| f as i64)
}
