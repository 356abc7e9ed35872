//! In-memory implementation of the link repository.
//!
//! Stores all records in RAM behind a single lock. Used when no database is
//! configured and as the backend for integration tests; not suitable for
//! multi-instance deployments since state is process-local.

use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use std::sync::RwLock;

use crate::domain::entities::{Click, Link, NewClick, NewLink};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;

#[derive(Default)]
struct MemoryInner {
    next_link_id: i64,
    next_click_id: i64,
    links: HashMap<String, StoredLink>,
}

struct StoredLink {
    link: Link,
    clicks: Vec<Click>,
}

/// In-memory link repository.
///
/// A single write lock makes `create_if_absent` and `append_click` atomic
/// with respect to concurrent callers, mirroring the guarantees the
/// PostgreSQL backend gets from its unique constraint and single-statement
/// append.
#[derive(Default)]
pub struct MemoryLinkRepository {
    inner: RwLock<MemoryInner>,
}

impl MemoryLinkRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl LinkRepository for MemoryLinkRepository {
    async fn create_if_absent(&self, new_link: NewLink) -> Result<Option<Link>, AppError> {
        let mut inner = self.inner.write().expect("link store lock poisoned");

        if inner.links.contains_key(&new_link.code) {
            return Ok(None);
        }

        inner.next_link_id += 1;
        let link = Link::new(
            inner.next_link_id,
            new_link.code.clone(),
            new_link.long_url,
            Utc::now(),
            new_link.expires_at,
            0,
        );

        inner.links.insert(
            new_link.code,
            StoredLink {
                link: link.clone(),
                clicks: Vec::new(),
            },
        );

        Ok(Some(link))
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<Link>, AppError> {
        let inner = self.inner.read().expect("link store lock poisoned");
        Ok(inner.links.get(code).map(|stored| stored.link.clone()))
    }

    async fn append_click(&self, code: &str, click: NewClick) -> Result<Option<Link>, AppError> {
        let mut inner = self.inner.write().expect("link store lock poisoned");

        inner.next_click_id += 1;
        let click_id = inner.next_click_id;

        let Some(stored) = inner.links.get_mut(code) else {
            return Ok(None);
        };

        stored.clicks.push(Click::new(
            click_id,
            stored.link.id,
            Utc::now(),
            click.user_agent,
            click.referer,
            click.ip,
        ));
        stored.link.clicks += 1;

        Ok(Some(stored.link.clone()))
    }

    async fn clicks_for_link(&self, link_id: i64) -> Result<Vec<Click>, AppError> {
        let inner = self.inner.read().expect("link store lock poisoned");

        Ok(inner
            .links
            .values()
            .find(|stored| stored.link.id == link_id)
            .map(|stored| stored.clicks.clone())
            .unwrap_or_default())
    }

    async fn ping(&self) -> Result<(), AppError> {
        Ok(())
    }
}
