//! Handler for per-link statistics.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::api::dto::clicks::ClickInfo;
use crate::api::dto::stats::LinkStatsResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Returns metadata and the full click history for a short link.
///
/// # Endpoint
///
/// `GET /shorturls/{code}`
///
/// # Response
///
/// ```json
/// {
///   "shortcode": "abc123",
///   "originalUrl": "https://example.com",
///   "createdAt": "2026-08-30T12:00:00Z",
///   "expiry": "2026-08-30T12:30:00Z",
///   "totalClicks": 1,
///   "clicks": [
///     {
///       "timestamp": "2026-08-30T12:05:00Z",
///       "referrer": "https://google.com",
///       "source": "203.0.113.9",
///       "userAgent": "Mozilla/5.0"
///     }
///   ]
/// }
/// ```
///
/// Pure read: no click is recorded and expired links stay visible.
///
/// # Errors
///
/// Returns 404 Not Found if the shortcode doesn't exist.
pub async fn stats_handler(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<Json<LinkStatsResponse>, AppError> {
    let stats = state.stats_service.get_link_stats(&code).await?;

    let response = LinkStatsResponse {
        shortcode: stats.link.code,
        original_url: stats.link.long_url,
        created_at: stats.link.created_at,
        expiry: stats.link.expires_at,
        total_clicks: stats.link.clicks,
        clicks: stats
            .clicks
            .into_iter()
            .map(|click| ClickInfo {
                timestamp: click.clicked_at,
                referrer: click.referer,
                source: click.ip,
                user_agent: click.user_agent,
            })
            .collect(),
    };

    Ok(Json(response))
}
