//! Best-effort extraction of visit metadata from an HTTP request.

use axum::http::{HeaderMap, header};
use std::net::SocketAddr;

use crate::domain::entities::NewClick;

/// Builds a click record from request headers and the peer address.
///
/// All fields are optional and never block recording:
///
/// - referrer: first of the `referer` / `referrer` headers
/// - source address: first entry of the `x-forwarded-for` chain, trimmed,
///   falling back to the direct peer IP
/// - user agent: the `user-agent` header
pub fn extract_click_metadata(headers: &HeaderMap, peer: SocketAddr) -> NewClick {
    let referer = header_str(headers, "referer").or_else(|| header_str(headers, "referrer"));

    let ip = headers
        .get("x-forwarded-for")
        .and_then(|v| v.to_str().ok())
        .and_then(|chain| chain.split(',').next())
        .map(|first| first.trim().to_string())
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| peer.ip().to_string());

    NewClick {
        user_agent: header_str(headers, header::USER_AGENT.as_str()),
        referer,
        ip: Some(ip),
    }
}

fn header_str(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(|s| s.to_string())
}
