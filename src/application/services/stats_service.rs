//! Link analytics read service.

use std::sync::Arc;

use crate::domain::entities::{Click, Link};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;
use serde_json::json;

/// A link together with its full ordered click history.
#[derive(Debug)]
pub struct LinkStats {
    pub link: Link,
    pub clicks: Vec<Click>,
}

/// Service serving per-link analytics.
///
/// Pure reads: repeated calls with no intervening visits return identical
/// results. Expired links remain readable.
pub struct StatsService {
    repository: Arc<dyn LinkRepository>,
}

impl StatsService {
    /// Creates a new stats service.
    pub fn new(repository: Arc<dyn LinkRepository>) -> Self {
        Self { repository }
    }

    /// Returns a link's metadata and click log in insertion order.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no link matches the code.
    pub async fn get_link_stats(&self, code: &str) -> Result<LinkStats, AppError> {
        let link = self
            .repository
            .find_by_code(code)
            .await?
            .ok_or_else(|| {
                AppError::not_found("Shortcode not found.", json!({ "shortcode": code }))
            })?;

        let clicks = self.repository.clicks_for_link(link.id).await?;

        Ok(LinkStats { link, clicks })
    }
}
