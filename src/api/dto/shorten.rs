//! DTOs for the link creation endpoint.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Request to shorten a URL.
#[derive(Debug, Deserialize)]
pub struct CreateLinkRequest {
    /// The target URL to shorten.
    pub url: String,

    /// Optional lifetime in minutes. Kept as a raw JSON number so the expiry
    /// policy can reject non-integer values instead of truncating them.
    pub validity: Option<serde_json::Number>,

    /// Optional caller-chosen shortcode (3-32 alphanumeric characters).
    pub shortcode: Option<String>,
}

/// Response for a freshly created link.
#[derive(Debug, Serialize)]
pub struct CreateLinkResponse {
    /// Full short URL, base URL plus assigned code.
    #[serde(rename = "shortLink")]
    pub short_link: String,

    /// Expiry instant, RFC 3339 / ISO-8601.
    pub expiry: DateTime<Utc>,
}
