use std::sync::Arc;

use crate::application::services::{LinkService, RedirectService, StatsService};
use crate::domain::repositories::LinkRepository;
use crate::infrastructure::log_sink::LogSink;

/// Shared application state injected into all handlers.
///
/// Constructed once at startup and passed explicitly through the router;
/// there is no ambient global state. The store connection inside the
/// repository is the only shared mutable resource.
#[derive(Clone)]
pub struct AppState {
    pub link_service: Arc<LinkService>,
    pub redirect_service: Arc<RedirectService>,
    pub stats_service: Arc<StatsService>,
    pub repository: Arc<dyn LinkRepository>,
    pub log_sink: Arc<dyn LogSink>,
    /// Base URL used to build returned short links, no trailing slash.
    pub base_url: String,
}

impl AppState {
    pub fn new(
        repository: Arc<dyn LinkRepository>,
        log_sink: Arc<dyn LogSink>,
        base_url: impl Into<String>,
    ) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();

        Self {
            link_service: Arc::new(LinkService::new(repository.clone())),
            redirect_service: Arc::new(RedirectService::new(repository.clone())),
            stats_service: Arc::new(StatsService::new(repository.clone())),
            repository,
            log_sink,
            base_url,
        }
    }

    /// Constructs the full short URL for an assigned code.
    pub fn short_url(&self, code: &str) -> String {
        format!("{}/{}", self.base_url, code)
    }
}
