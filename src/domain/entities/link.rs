//! Link entity representing a shortened URL mapping.

use chrono::{DateTime, Utc};

/// A shortened URL link with metadata.
///
/// Represents the mapping between a short code and a target URL. The code,
/// target URL, creation and expiry instants are immutable after creation;
/// only the click counter (and the associated click log) changes afterwards.
#[derive(Debug, Clone)]
pub struct Link {
    pub id: i64,
    pub code: String,
    pub long_url: String,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
    /// Number of recorded visits, kept equal to the number of click rows by
    /// the store's atomic append operation.
    pub clicks: i64,
}

impl Link {
    /// Creates a new Link instance.
    pub fn new(
        id: i64,
        code: String,
        long_url: String,
        created_at: DateTime<Utc>,
        expires_at: DateTime<Utc>,
        clicks: i64,
    ) -> Self {
        Self {
            id,
            code,
            long_url,
            created_at,
            expires_at,
            clicks,
        }
    }

    /// Returns true if the link has passed its expiry time.
    pub fn is_expired(&self) -> bool {
        Utc::now() >= self.expires_at
    }
}

/// Input data for creating a new link.
#[derive(Debug, Clone)]
pub struct NewLink {
    pub code: String,
    pub long_url: String,
    pub expires_at: DateTime<Utc>,
}
