//! Handler for short URL redirects.

use axum::{
    extract::{ConnectInfo, Path, State},
    http::{HeaderMap, StatusCode, header},
    response::{IntoResponse, Response},
};
use std::net::SocketAddr;
use tracing::warn;

use crate::error::AppError;
use crate::infrastructure::log_sink::LogEntry;
use crate::state::AppState;
use crate::utils::request_meta::extract_click_metadata;

/// Redirects a shortcode to its target URL, recording one click.
///
/// # Endpoint
///
/// `GET /{code}`
///
/// # Request Flow
///
/// 1. Resolve the code (404 unknown, 410 expired - no click recorded)
/// 2. Extract visit metadata from headers and the peer address
/// 3. Atomically append the click to the link's history
/// 4. Respond `302 Found` with the `Location` header set
///
/// A click-append failure after a successful resolve is logged and swallowed:
/// resolve and record are one logical visit but share no transaction, and
/// dropping that single click is preferred over failing the redirect.
pub async fn redirect_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
    headers: HeaderMap,
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
) -> Result<Response, AppError> {
    let link = state.redirect_service.resolve(&code).await.inspect_err(|e| {
        if matches!(e, AppError::Expired { .. }) {
            state
                .log_sink
                .ship(LogEntry::info("handler", format!("expired access: {code}")));
        }
    })?;

    let click = extract_click_metadata(&headers, addr);
    if let Err(e) = state.redirect_service.record_click(&code, click).await {
        warn!("failed to record click for {code}: {e}");
    }

    state
        .log_sink
        .ship(LogEntry::info("handler", format!("redirect: {code}")));

    Ok((
        StatusCode::FOUND,
        [(header::LOCATION, link.long_url)],
    )
        .into_response())
}
