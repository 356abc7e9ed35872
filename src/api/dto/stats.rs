//! DTOs for per-link statistics.

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::clicks::ClickInfo;

/// Metadata and full click history for a short link.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkStatsResponse {
    pub shortcode: String,
    pub original_url: String,
    pub created_at: DateTime<Utc>,
    pub expiry: DateTime<Utc>,
    pub total_clicks: i64,
    pub clicks: Vec<ClickInfo>,
}
