//! HTTP server initialization and runtime setup.
//!
//! Handles store selection, migrations, log sink wiring, and the Axum server
//! lifecycle.

use crate::config::Config;
use crate::domain::repositories::LinkRepository;
use crate::infrastructure::log_sink::{HttpLogSink, LogSink, NullLogSink};
use crate::infrastructure::persistence::{MemoryLinkRepository, PgLinkRepository};
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::Result;
use axum::ServiceExt;
use axum::extract::Request;
use sqlx::postgres::PgPoolOptions;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - the link store (PostgreSQL pool + migrations, or the in-memory backend
///   when no database is configured)
/// - the outbound log sink (or a no-op when no collector is configured)
/// - the Axum HTTP server with peer-address propagation
///
/// # Errors
///
/// Returns an error if the database connection, migration run, or server
/// bind fails.
pub async fn run(config: Config) -> Result<()> {
    let repository: Arc<dyn LinkRepository> = match &config.database_url {
        Some(database_url) => {
            let pool = PgPoolOptions::new()
                .max_connections(config.db_max_connections)
                .acquire_timeout(Duration::from_secs(config.db_connect_timeout))
                .idle_timeout(Duration::from_secs(config.db_idle_timeout))
                .max_lifetime(Duration::from_secs(config.db_max_lifetime))
                .connect(database_url)
                .await?;
            tracing::info!("Connected to database");

            sqlx::migrate!("./migrations").run(&pool).await?;

            Arc::new(PgLinkRepository::new(Arc::new(pool)))
        }
        None => {
            tracing::warn!("No database configured, using in-memory store");
            Arc::new(MemoryLinkRepository::new())
        }
    };

    let log_sink: Arc<dyn LogSink> = match &config.log_sink_url {
        Some(endpoint) => {
            tracing::info!("Log sink enabled ({endpoint})");
            Arc::new(HttpLogSink::new(endpoint.clone()))
        }
        None => {
            tracing::info!("Log sink disabled");
            Arc::new(NullLogSink)
        }
    };

    let state = AppState::new(repository, log_sink, config.base_url.clone());

    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(
        listener,
        ServiceExt::<Request>::into_make_service_with_connect_info::<SocketAddr>(app),
    )
    .await?;

    Ok(())
}
