//! DTOs for click event data.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Individual click event information.
///
/// Absent metadata is serialized as explicit `null` rather than omitted, so
/// every click object carries the same shape.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClickInfo {
    pub timestamp: DateTime<Utc>,
    pub referrer: Option<String>,
    pub source: Option<String>,
    pub user_agent: Option<String>,
}
