mod common;

use axum::{Router, routing::post};
use axum_test::TestServer;
use chrono::{DateTime, Duration, Utc};
use linksnip::api::handlers::shorten_handler;
use serde_json::json;

fn test_server() -> TestServer {
    let (state, _repo) = common::create_test_state();
    let app = Router::new()
        .route("/shorturls", post(shorten_handler))
        .with_state(state);

    TestServer::new(app).unwrap()
}

#[tokio::test]
async fn test_shorten_success_with_generated_code() {
    let server = test_server();

    let response = server
        .post("/shorturls")
        .json(&json!({ "url": "https://example.com", "validity": 1 }))
        .await;

    response.assert_status(axum::http::StatusCode::CREATED);

    let json = response.json::<serde_json::Value>();

    let short_link = json["shortLink"].as_str().unwrap();
    let code = short_link.rsplit('/').next().unwrap();
    assert_eq!(code.len(), 7);
    assert!(code.chars().all(|c| c.is_ascii_alphanumeric()));

    // expiry ≈ now + 1 minute
    let expiry: DateTime<Utc> = json["expiry"].as_str().unwrap().parse().unwrap();
    let delta = expiry - Utc::now();
    assert!(delta > Duration::seconds(50) && delta <= Duration::seconds(61));
}

#[tokio::test]
async fn test_shorten_default_validity_is_thirty_minutes() {
    let server = test_server();

    let response = server
        .post("/shorturls")
        .json(&json!({ "url": "https://example.com" }))
        .await;

    response.assert_status(axum::http::StatusCode::CREATED);

    let json = response.json::<serde_json::Value>();
    let expiry: DateTime<Utc> = json["expiry"].as_str().unwrap().parse().unwrap();
    let delta = expiry - Utc::now();
    assert!(delta > Duration::minutes(29) && delta <= Duration::minutes(30));
}

#[tokio::test]
async fn test_shorten_with_custom_shortcode() {
    let server = test_server();

    let response = server
        .post("/shorturls")
        .json(&json!({ "url": "https://a.com", "shortcode": "abc123" }))
        .await;

    response.assert_status(axum::http::StatusCode::CREATED);

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["shortLink"], "http://localhost:3000/abc123");
}

#[tokio::test]
async fn test_shorten_duplicate_custom_shortcode_conflicts() {
    let server = test_server();

    server
        .post("/shorturls")
        .json(&json!({ "url": "https://a.com", "shortcode": "abc123" }))
        .await
        .assert_status(axum::http::StatusCode::CREATED);

    let response = server
        .post("/shorturls")
        .json(&json!({ "url": "https://a.com", "shortcode": "abc123" }))
        .await;

    response.assert_status(axum::http::StatusCode::CONFLICT);

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "shortcode_conflict");
}

#[tokio::test]
async fn test_shorten_invalid_url() {
    let server = test_server();

    let response = server
        .post("/shorturls")
        .json(&json!({ "url": "not-a-url" }))
        .await;

    response.assert_status_bad_request();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "invalid_url");
}

#[tokio::test]
async fn test_shorten_negative_validity() {
    let server = test_server();

    let response = server
        .post("/shorturls")
        .json(&json!({ "url": "https://example.com", "validity": -1 }))
        .await;

    response.assert_status_bad_request();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "invalid_validity");
}

#[tokio::test]
async fn test_shorten_overflowing_validity_rejected() {
    let server = test_server();

    // Positive, but the expiry instant would overflow the date range; must
    // answer 400 rather than panic the handler task.
    let response = server
        .post("/shorturls")
        .json(&json!({ "url": "https://example.com", "validity": i64::MAX }))
        .await;

    response.assert_status_bad_request();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "invalid_validity");
}

#[tokio::test]
async fn test_shorten_integer_valued_float_validity_accepted() {
    let server = test_server();

    let response = server
        .post("/shorturls")
        .json(&json!({ "url": "https://example.com", "validity": 100.0 }))
        .await;

    response.assert_status(axum::http::StatusCode::CREATED);
}

#[tokio::test]
async fn test_shorten_fractional_validity() {
    let server = test_server();

    let response = server
        .post("/shorturls")
        .json(&json!({ "url": "https://example.com", "validity": 2.5 }))
        .await;

    response.assert_status_bad_request();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "invalid_validity");
}

#[tokio::test]
async fn test_shorten_invalid_shortcode() {
    let server = test_server();

    let response = server
        .post("/shorturls")
        .json(&json!({ "url": "https://example.com", "shortcode": "a!" }))
        .await;

    response.assert_status_bad_request();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "invalid_shortcode");
}

#[tokio::test]
async fn test_shorten_validation_precedes_store_mutation() {
    let (state, repo) = common::create_test_state();
    let app = Router::new()
        .route("/shorturls", post(shorten_handler))
        .with_state(state);
    let server = TestServer::new(app).unwrap();

    server
        .post("/shorturls")
        .json(&json!({ "url": "https://example.com", "validity": 0, "shortcode": "abc123" }))
        .await
        .assert_status_bad_request();

    use linksnip::domain::repositories::LinkRepository;
    assert!(repo.find_by_code("abc123").await.unwrap().is_none());
}
