#![allow(dead_code)]

use chrono::{DateTime, Duration, Utc};
use std::net::SocketAddr;
use std::sync::Arc;

use axum::extract::ConnectInfo;
use linksnip::domain::entities::NewLink;
use linksnip::domain::repositories::LinkRepository;
use linksnip::infrastructure::log_sink::NullLogSink;
use linksnip::infrastructure::persistence::MemoryLinkRepository;
use linksnip::state::AppState;

pub fn create_test_state() -> (AppState, Arc<MemoryLinkRepository>) {
    let repo = Arc::new(MemoryLinkRepository::new());
    let state = AppState::new(
        repo.clone(),
        Arc::new(NullLogSink),
        "http://localhost:3000",
    );

    (state, repo)
}

pub async fn create_test_link(repo: &MemoryLinkRepository, code: &str, url: &str) {
    create_link_with_expiry(repo, code, url, Utc::now() + Duration::minutes(30)).await;
}

pub async fn create_expired_link(repo: &MemoryLinkRepository, code: &str, url: &str) {
    create_link_with_expiry(repo, code, url, Utc::now() - Duration::hours(1)).await;
}

pub async fn create_link_with_expiry(
    repo: &MemoryLinkRepository,
    code: &str,
    url: &str,
    expires_at: DateTime<Utc>,
) {
    repo.create_if_absent(NewLink {
        code: code.to_string(),
        long_url: url.to_string(),
        expires_at,
    })
    .await
    .unwrap()
    .expect("test link code already taken");
}

/// Injects a fixed peer address so handlers using `ConnectInfo` work under
/// `axum_test::TestServer`.
#[derive(Clone)]
pub struct MockConnectInfoLayer;

impl<S> tower::Layer<S> for MockConnectInfoLayer {
    type Service = MockConnectInfoService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        MockConnectInfoService { inner }
    }
}

#[derive(Clone)]
pub struct MockConnectInfoService<S> {
    inner: S,
}

impl<S, B> tower::Service<axum::http::Request<B>> for MockConnectInfoService<S>
where
    S: tower::Service<axum::http::Request<B>> + Clone + Send + 'static,
    S::Future: Send + 'static,
    B: Send + 'static,
{
    type Response = S::Response;
    type Error = S::Error;
    type Future = S::Future;

    fn poll_ready(
        &mut self,
        cx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, mut req: axum::http::Request<B>) -> Self::Future {
        let addr: SocketAddr = "127.0.0.1:12345".parse().unwrap();
        req.extensions_mut().insert(ConnectInfo(addr));
        self.inner.call(req)
    }
}
