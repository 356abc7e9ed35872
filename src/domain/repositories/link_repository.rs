//! Repository trait for short link data access.

use crate::domain::entities::{Click, Link, NewClick, NewLink};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for shortened links and their click history.
///
/// The store is the single arbiter of shortcode uniqueness and click
/// consistency: both `create_if_absent` and `append_click` must be atomic
/// with respect to concurrent callers, so handlers never need in-process
/// locks.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgLinkRepository`] - PostgreSQL
/// - [`crate::infrastructure::persistence::MemoryLinkRepository`] - in-memory,
///   used for tests and databaseless local runs
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkRepository: Send + Sync {
    /// Creates a link if its code is not already taken.
    ///
    /// Must be performed as a single atomic insert (a uniqueness constraint
    /// enforced by the storage layer), never as a check-then-insert sequence:
    /// two concurrent requests racing on the same code must produce exactly
    /// one live record.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(Link))` - the freshly created record
    /// - `Ok(None)` - the code is already taken (duplicate key)
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn create_if_absent(&self, new_link: NewLink) -> Result<Option<Link>, AppError>;

    /// Finds a link by its short code. Point read, no side effects.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn find_by_code(&self, code: &str) -> Result<Option<Link>, AppError>;

    /// Atomically appends a click to a link's history and increments its
    /// counter by one.
    ///
    /// Implementations must use a single push-and-increment operation keyed
    /// by code, not a read-modify-write on a fetched copy, so concurrent
    /// visits to the same code never lose updates.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(Link))` - the updated record
    /// - `Ok(None)` - no link with this code exists
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn append_click(&self, code: &str, click: NewClick) -> Result<Option<Link>, AppError>;

    /// Returns the full click history of a link in insertion order.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn clicks_for_link(&self, link_id: i64) -> Result<Vec<Click>, AppError>;

    /// Cheap connectivity probe for the health endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the store is unreachable.
    async fn ping(&self) -> Result<(), AppError>;
}
