//! PostgreSQL implementation of the link repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{Click, Link, NewClick, NewLink};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;

/// PostgreSQL repository for link storage and click recording.
///
/// The `links.code` unique constraint is the sole arbiter of shortcode
/// uniqueness, and click appends run as a single statement so concurrent
/// visits never lose counter updates.
pub struct PgLinkRepository {
    pool: Arc<PgPool>,
}

impl PgLinkRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct LinkRow {
    id: i64,
    code: String,
    long_url: String,
    created_at: DateTime<Utc>,
    expires_at: DateTime<Utc>,
    clicks: i64,
}

impl From<LinkRow> for Link {
    fn from(r: LinkRow) -> Self {
        Link::new(r.id, r.code, r.long_url, r.created_at, r.expires_at, r.clicks)
    }
}

#[derive(sqlx::FromRow)]
struct ClickRow {
    id: i64,
    link_id: i64,
    clicked_at: DateTime<Utc>,
    user_agent: Option<String>,
    referer: Option<String>,
    ip: Option<String>,
}

impl From<ClickRow> for Click {
    fn from(r: ClickRow) -> Self {
        Click::new(
            r.id,
            r.link_id,
            r.clicked_at,
            r.user_agent,
            r.referer,
            r.ip,
        )
    }
}

#[async_trait]
impl LinkRepository for PgLinkRepository {
    async fn create_if_absent(&self, new_link: NewLink) -> Result<Option<Link>, AppError> {
        // ON CONFLICT DO NOTHING closes the check-then-insert race: exactly
        // one of two concurrent inserts with the same code returns a row.
        let row = sqlx::query_as::<_, LinkRow>(
            r#"
            INSERT INTO links (code, long_url, expires_at)
            VALUES ($1, $2, $3)
            ON CONFLICT (code) DO NOTHING
            RETURNING id, code, long_url, created_at, expires_at, clicks
            "#,
        )
        .bind(&new_link.code)
        .bind(&new_link.long_url)
        .bind(new_link.expires_at)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Link::from))
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<Link>, AppError> {
        let row = sqlx::query_as::<_, LinkRow>(
            r#"
            SELECT id, code, long_url, created_at, expires_at, clicks
            FROM links
            WHERE code = $1
            "#,
        )
        .bind(code)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Link::from))
    }

    async fn append_click(&self, code: &str, click: NewClick) -> Result<Option<Link>, AppError> {
        // One statement inserts the click row and bumps the counter, keeping
        // `clicks` equal to the number of click rows without a transaction
        // or a read-modify-write on a fetched copy.
        let row = sqlx::query_as::<_, LinkRow>(
            r#"
            WITH target AS (
                SELECT id FROM links WHERE code = $1
            ), inserted AS (
                INSERT INTO link_clicks (link_id, referer, user_agent, ip)
                SELECT id, $2, $3, $4 FROM target
                RETURNING link_id
            )
            UPDATE links
            SET clicks = clicks + 1
            WHERE id IN (SELECT link_id FROM inserted)
            RETURNING id, code, long_url, created_at, expires_at, clicks
            "#,
        )
        .bind(code)
        .bind(&click.referer)
        .bind(&click.user_agent)
        .bind(&click.ip)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Link::from))
    }

    async fn clicks_for_link(&self, link_id: i64) -> Result<Vec<Click>, AppError> {
        let rows = sqlx::query_as::<_, ClickRow>(
            r#"
            SELECT id, link_id, clicked_at, user_agent, referer, ip
            FROM link_clicks
            WHERE link_id = $1
            ORDER BY id
            "#,
        )
        .bind(link_id)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Click::from).collect())
    }

    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1")
            .execute(self.pool.as_ref())
            .await?;
        Ok(())
    }
}
