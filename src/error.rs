use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Value, json};

#[derive(Serialize)]
struct ErrorBody {
    error: ErrorInfo,
}

#[derive(Debug, Serialize)]
pub struct ErrorInfo {
    pub code: &'static str,
    pub message: String,
    pub details: Value,
}

/// Application error taxonomy.
///
/// Each variant maps to exactly one HTTP status:
///
/// - `InvalidUrl` / `InvalidValidity` / `InvalidShortcode` → 400
/// - `NotFound` → 404
/// - `ShortcodeConflict` → 409
/// - `Expired` → 410
/// - `AllocationExhausted` / `Internal` → 500
///
/// `AllocationExhausted` is an operational alarm (code generation could not
/// find a free slot within its retry budget), not a client error.
#[derive(Debug)]
pub enum AppError {
    InvalidUrl { message: String, details: Value },
    InvalidValidity { message: String, details: Value },
    InvalidShortcode { message: String, details: Value },
    ShortcodeConflict { message: String, details: Value },
    NotFound { message: String, details: Value },
    Expired { message: String, details: Value },
    AllocationExhausted { details: Value },
    Internal { message: String, details: Value },
}

impl AppError {
    pub fn invalid_url(message: impl Into<String>, details: Value) -> Self {
        Self::InvalidUrl {
            message: message.into(),
            details,
        }
    }
    pub fn invalid_validity(message: impl Into<String>, details: Value) -> Self {
        Self::InvalidValidity {
            message: message.into(),
            details,
        }
    }
    pub fn invalid_shortcode(message: impl Into<String>, details: Value) -> Self {
        Self::InvalidShortcode {
            message: message.into(),
            details,
        }
    }
    pub fn conflict(message: impl Into<String>, details: Value) -> Self {
        Self::ShortcodeConflict {
            message: message.into(),
            details,
        }
    }
    pub fn not_found(message: impl Into<String>, details: Value) -> Self {
        Self::NotFound {
            message: message.into(),
            details,
        }
    }
    pub fn expired(message: impl Into<String>, details: Value) -> Self {
        Self::Expired {
            message: message.into(),
            details,
        }
    }
    pub fn internal(message: impl Into<String>, details: Value) -> Self {
        Self::Internal {
            message: message.into(),
            details,
        }
    }

    fn parts(self) -> (StatusCode, &'static str, String, Value) {
        match self {
            AppError::InvalidUrl { message, details } => {
                (StatusCode::BAD_REQUEST, "invalid_url", message, details)
            }
            AppError::InvalidValidity { message, details } => (
                StatusCode::BAD_REQUEST,
                "invalid_validity",
                message,
                details,
            ),
            AppError::InvalidShortcode { message, details } => (
                StatusCode::BAD_REQUEST,
                "invalid_shortcode",
                message,
                details,
            ),
            AppError::ShortcodeConflict { message, details } => {
                (StatusCode::CONFLICT, "shortcode_conflict", message, details)
            }
            AppError::NotFound { message, details } => {
                (StatusCode::NOT_FOUND, "not_found", message, details)
            }
            AppError::Expired { message, details } => {
                (StatusCode::GONE, "link_expired", message, details)
            }
            AppError::AllocationExhausted { details } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "allocation_exhausted",
                "Could not allocate a free shortcode".to_string(),
                details,
            ),
            AppError::Internal { message, details } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "internal_error",
                message,
                details,
            ),
        }
    }

    /// Name of the variant, used when shipping error events to the log sink.
    pub fn code(&self) -> &'static str {
        match self {
            AppError::InvalidUrl { .. } => "invalid_url",
            AppError::InvalidValidity { .. } => "invalid_validity",
            AppError::InvalidShortcode { .. } => "invalid_shortcode",
            AppError::ShortcodeConflict { .. } => "shortcode_conflict",
            AppError::NotFound { .. } => "not_found",
            AppError::Expired { .. } => "link_expired",
            AppError::AllocationExhausted { .. } => "allocation_exhausted",
            AppError::Internal { .. } => "internal_error",
        }
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::InvalidUrl { message, .. }
            | AppError::InvalidValidity { message, .. }
            | AppError::InvalidShortcode { message, .. }
            | AppError::ShortcodeConflict { message, .. }
            | AppError::NotFound { message, .. }
            | AppError::Expired { message, .. }
            | AppError::Internal { message, .. } => write!(f, "{message}"),
            AppError::AllocationExhausted { .. } => {
                write!(f, "Could not allocate a free shortcode")
            }
        }
    }
}

impl std::error::Error for AppError {}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message, details) = self.parts();

        let body = ErrorBody {
            error: ErrorInfo {
                code,
                message,
                details,
            },
        };

        (status, Json(body)).into_response()
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        if let Some(db) = e.as_database_error() {
            if db.is_unique_violation() {
                return AppError::conflict(
                    "Unique constraint violation",
                    json!({ "constraint": db.constraint() }),
                );
            }
        }

        tracing::error!("database error: {e}");
        AppError::internal("Database error", json!({}))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        let cases = [
            (
                AppError::invalid_url("bad url", json!({})),
                StatusCode::BAD_REQUEST,
            ),
            (
                AppError::invalid_validity("bad validity", json!({})),
                StatusCode::BAD_REQUEST,
            ),
            (
                AppError::invalid_shortcode("bad code", json!({})),
                StatusCode::BAD_REQUEST,
            ),
            (AppError::conflict("taken", json!({})), StatusCode::CONFLICT),
            (
                AppError::not_found("missing", json!({})),
                StatusCode::NOT_FOUND,
            ),
            (AppError::expired("gone", json!({})), StatusCode::GONE),
            (
                AppError::AllocationExhausted { details: json!({}) },
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
            (
                AppError::internal("boom", json!({})),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (err, want) in cases {
            assert_eq!(err.parts().0, want);
        }
    }

    #[test]
    fn test_display_uses_message() {
        let err = AppError::not_found("Shortcode not found", json!({ "code": "abc" }));
        assert_eq!(err.to_string(), "Shortcode not found");
    }

    #[test]
    fn test_code_matches_variant() {
        let err = AppError::expired("Link expired", json!({}));
        assert_eq!(err.code(), "link_expired");
    }
}
