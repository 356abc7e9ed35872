//! Router configuration.
//!
//! # Route Structure
//!
//! - `POST /shorturls`        - Create a short link
//! - `GET  /shorturls/{code}` - Link metadata and click history
//! - `GET  /health`           - Health check
//! - `GET  /{code}`           - Redirect (records one click)
//!
//! # Middleware
//!
//! - **Tracing** - structured request/response logging
//! - **Path normalization** - trailing slash handling

use crate::api::handlers::{health_handler, redirect_handler, shorten_handler, stats_handler};
use crate::api::middleware::tracing;
use crate::state::AppState;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
///
/// Literal segments win over the `/{code}` capture, so `/health` and
/// `/shorturls/...` are never treated as shortcodes.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    let router = Router::new()
        .route("/shorturls", axum::routing::post(shorten_handler))
        .route("/shorturls/{code}", get(stats_handler))
        .route("/health", get(health_handler))
        .route("/{code}", get(redirect_handler))
        .with_state(state)
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
