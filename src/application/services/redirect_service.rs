//! Redirect resolution and click recording service.

use std::sync::Arc;

use crate::domain::entities::{Link, NewClick};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;
use serde_json::json;

/// Service resolving shortcodes to redirect targets and recording visits.
///
/// Resolution and recording are two independent store calls treated as one
/// logical visit: recording happens only after a successful, non-expired
/// resolve, and a failure between the two simply drops that one click.
pub struct RedirectService {
    repository: Arc<dyn LinkRepository>,
}

impl RedirectService {
    /// Creates a new redirect service.
    pub fn new(repository: Arc<dyn LinkRepository>) -> Self {
        Self { repository }
    }

    /// Resolves a shortcode to its link record.
    ///
    /// Read-only: an expired record is reported but left in place, there is
    /// no lazy deletion.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] for unknown codes and
    /// [`AppError::Expired`] once `expires_at` has passed.
    pub async fn resolve(&self, code: &str) -> Result<Link, AppError> {
        let link = self
            .repository
            .find_by_code(code)
            .await?
            .ok_or_else(|| {
                AppError::not_found("Shortcode not found.", json!({ "shortcode": code }))
            })?;

        if link.is_expired() {
            return Err(AppError::expired(
                "Link expired.",
                json!({ "shortcode": code, "expiredAt": link.expires_at }),
            ));
        }

        Ok(link)
    }

    /// Appends one click to a link's history.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] for unknown codes and
    /// [`AppError::Internal`] on store failures.
    pub async fn record_click(&self, code: &str, click: NewClick) -> Result<Link, AppError> {
        self.repository
            .append_click(code, click)
            .await?
            .ok_or_else(|| {
                AppError::not_found("Shortcode not found.", json!({ "shortcode": code }))
            })
    }
}
