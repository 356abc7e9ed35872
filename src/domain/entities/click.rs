//! Click entity representing a single redirect event.

use chrono::{DateTime, Utc};

/// A click event recorded when a shortened link is accessed.
///
/// Captures metadata about each redirect for analytics purposes, including
/// client information (user agent, referrer) and network origin (IP address).
#[derive(Debug, Clone)]
pub struct Click {
    pub id: i64,
    pub link_id: i64,
    pub clicked_at: DateTime<Utc>,
    pub user_agent: Option<String>,
    pub referer: Option<String>,
    pub ip: Option<String>,
}

impl Click {
    /// Creates a new Click instance.
    ///
    /// All metadata fields are optional to handle cases where client
    /// information is unavailable.
    pub fn new(
        id: i64,
        link_id: i64,
        clicked_at: DateTime<Utc>,
        user_agent: Option<String>,
        referer: Option<String>,
        ip: Option<String>,
    ) -> Self {
        Self {
            id,
            link_id,
            clicked_at,
            user_agent,
            referer,
            ip,
        }
    }
}

/// Input data for recording a new click event.
///
/// The timestamp is assigned by the store at append time.
#[derive(Debug, Clone, Default)]
pub struct NewClick {
    pub user_agent: Option<String>,
    pub referer: Option<String>,
    pub ip: Option<String>,
}
