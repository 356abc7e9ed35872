//! Outbound log sink for significant service events.
//!
//! The sink is a pure collaborator: dispatch is fire-and-forget with a short
//! timeout, its result is never awaited on the request path, and delivery
//! failures are logged locally and swallowed. It can never turn a successful
//! business operation into a failed response.

use serde::Serialize;
use std::sync::OnceLock;
use std::time::Duration;
use tracing::{debug, warn};
use ureq::Agent;

/// Outbound HTTP timeout for log deliveries.
const SHIP_TIMEOUT_SECS: u64 = 5;

static HTTP_AGENT: OnceLock<Agent> = OnceLock::new();

fn agent() -> &'static Agent {
    HTTP_AGENT.get_or_init(|| {
        Agent::config_builder()
            .timeout_global(Some(Duration::from_secs(SHIP_TIMEOUT_SECS)))
            .build()
            .into()
    })
}

/// One event shipped to the external log collector.
#[derive(Debug, Clone, Serialize)]
pub struct LogEntry {
    pub stack: &'static str,
    pub level: &'static str,
    pub package: &'static str,
    pub message: String,
}

impl LogEntry {
    pub fn info(package: &'static str, message: impl Into<String>) -> Self {
        Self {
            stack: "backend",
            level: "info",
            package,
            message: message.into(),
        }
    }

    pub fn error(package: &'static str, message: impl Into<String>) -> Self {
        Self {
            stack: "backend",
            level: "error",
            package,
            message: message.into(),
        }
    }
}

/// Destination for significant service events.
pub trait LogSink: Send + Sync {
    /// Dispatches an entry without blocking the caller.
    fn ship(&self, entry: LogEntry);
}

/// Ships entries to an external HTTP collector.
///
/// Each entry is posted as JSON from a blocking task spawned off the request
/// path; the HTTP agent carries a 5 second global timeout.
pub struct HttpLogSink {
    endpoint: String,
}

impl HttpLogSink {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
        }
    }

    fn post_sync(endpoint: String, entry: LogEntry) {
        match agent().post(&endpoint).send_json(&entry) {
            Ok(_) => debug!("shipped log entry [{}] to {}", entry.level, endpoint),
            Err(e) => warn!("failed to ship log entry to {}: {}", endpoint, e),
        }
    }
}

impl LogSink for HttpLogSink {
    fn ship(&self, entry: LogEntry) {
        let endpoint = self.endpoint.clone();

        tokio::spawn(async move {
            if let Err(e) =
                tokio::task::spawn_blocking(move || Self::post_sync(endpoint, entry)).await
            {
                warn!("log sink task failed: {e}");
            }
        });
    }
}

/// No-op sink used when no collector endpoint is configured.
pub struct NullLogSink;

impl LogSink for NullLogSink {
    fn ship(&self, _entry: LogEntry) {}
}
