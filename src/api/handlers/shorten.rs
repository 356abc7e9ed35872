//! Handler for the link creation endpoint.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::shorten::{CreateLinkRequest, CreateLinkResponse};
use crate::error::AppError;
use crate::infrastructure::log_sink::LogEntry;
use crate::state::AppState;

/// Creates a shortened URL.
///
/// # Endpoint
///
/// `POST /shorturls`
///
/// # Request Body
///
/// ```json
/// {
///   "url": "https://example.com",
///   "validity": 60,          // optional, minutes, default 30
///   "shortcode": "promo25"   // optional, 3-32 alphanumeric
/// }
/// ```
///
/// # Response
///
/// `201 Created`
///
/// ```json
/// {
///   "shortLink": "http://localhost:3000/promo25",
///   "expiry": "2026-08-30T13:00:00Z"
/// }
/// ```
///
/// # Errors
///
/// - `400` invalid url / validity / shortcode
/// - `409` caller-chosen shortcode already taken
/// - `500` code allocation exhausted or store failure
pub async fn shorten_handler(
    State(state): State<AppState>,
    Json(payload): Json<CreateLinkRequest>,
) -> Result<(StatusCode, Json<CreateLinkResponse>), AppError> {
    let link = state
        .link_service
        .create_link(payload.url, payload.validity.as_ref(), payload.shortcode)
        .await
        .inspect_err(|e| {
            if matches!(e, AppError::AllocationExhausted { .. }) {
                state
                    .log_sink
                    .ship(LogEntry::error("service", "shortcode allocation exhausted"));
            }
        })?;

    state.log_sink.ship(LogEntry::info(
        "handler",
        format!("created shortcode {} -> {}", link.code, link.long_url),
    ));

    let response = CreateLinkResponse {
        short_link: state.short_url(&link.code),
        expiry: link.expires_at,
    };

    Ok((StatusCode::CREATED, Json(response)))
}
