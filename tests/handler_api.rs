mod common;

use axum::http::StatusCode;
use serde_json::{Value, json};
use std::sync::Arc;

#[tokio::test]
async fn test_shorten_returns_short_url() {
    let (server, _) = common::create_test_server();

    let response = server
        .post("/api/shorten")
        .json(&json!({ "url": "https://example.com/path" }))
        .await;

    response.assert_status_ok();

    let json = response.json::<Value>();
    assert_eq!(json["short_id"], "1");
    assert_eq!(json["short_url"], "http://localhost:3000/1");
    assert_eq!(json["long_url"], "https://example.com/path");
}

#[tokio::test]
async fn test_shorten_is_idempotent() {
    let (server, _) = common::create_test_server();

    let first = server
        .post("/api/shorten")
        .json(&json!({ "url": "https://example.com" }))
        .await
        .json::<Value>();
    let second = server
        .post("/api/shorten")
        .json(&json!({ "url": "https://example.com" }))
        .await
        .json::<Value>();

    assert_eq!(first["short_id"], second["short_id"]);
}

#[tokio::test]
async fn test_shorten_invalid_url() {
    let (server, store) = common::create_test_server();

    let response = server
        .post("/api/shorten")
        .json(&json!({ "url": "not-a-url" }))
        .await;

    response.assert_status_bad_request();

    let json = response.json::<Value>();
    assert_eq!(json["error"]["code"], "validation_error");
    assert_eq!(json["error"]["message"], "invalid url");
    assert!(store.is_empty());
}

#[tokio::test]
async fn test_shorten_rejects_url_with_newline() {
    let (server, store) = common::create_test_server();

    let response = server
        .post("/api/shorten")
        .json(&json!({ "url": "https://example.com/a\nb" }))
        .await;

    response.assert_status_bad_request();
    assert_eq!(response.json::<Value>()["error"]["message"], "invalid url");
    assert!(store.is_empty());
}

#[tokio::test]
async fn test_api_and_page_agree_on_long_urls() {
    let (server, store) = common::create_test_server();
    let long_url = format!("https://example.com/{}", "a".repeat(3000));

    let api = server
        .post("/api/shorten")
        .json(&json!({ "url": long_url }))
        .await;
    let page = server
        .post("/create")
        .form(&[("url", long_url.as_str())])
        .await;

    api.assert_status_bad_request();
    page.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(api.json::<Value>()["error"]["message"], "invalid url");
    assert!(store.is_empty());
}

#[tokio::test]
async fn test_api_and_page_share_ids() {
    let (server, _) = common::create_test_server();

    let api = server
        .post("/api/shorten")
        .json(&json!({ "url": "https://example.com/shared" }))
        .await
        .json::<Value>();
    let page = server
        .post("/create")
        .form(&[("url", "https://example.com/shared")])
        .await;

    assert_eq!(api["short_id"], "1");
    assert_eq!(page.header("location"), "/1_details");
}

#[tokio::test]
async fn test_shorten_non_http_scheme() {
    let (server, _) = common::create_test_server();

    let response = server
        .post("/api/shorten")
        .json(&json!({ "url": "ftp://example.com/file" }))
        .await;

    response.assert_status_bad_request();
    assert_eq!(response.json::<Value>()["error"]["message"], "invalid url");
}

#[tokio::test]
async fn test_link_list() {
    let (server, _) = common::create_test_server();

    for url in ["https://a.example", "https://b.example"] {
        server.post("/api/shorten").json(&json!({ "url": url })).await;
    }

    let response = server.get("/api/links").await;

    response.assert_status_ok();

    let json = response.json::<Value>();
    assert_eq!(json["total"], 2);
    assert_eq!(json["items"][0]["short_id"], "2");
    assert_eq!(json["items"][0]["long_url"], "https://b.example");
    assert_eq!(json["items"][1]["id"], 1);
}

#[tokio::test]
async fn test_link_details_counts_follows() {
    let (server, _) = common::create_test_server();

    server
        .post("/api/shorten")
        .json(&json!({ "url": "https://example.com" }))
        .await;
    server.get("/1").await;

    let response = server.get("/api/links/1").await;

    response.assert_status_ok();

    let json = response.json::<Value>();
    assert_eq!(json["long_url"], "https://example.com");
    assert_eq!(json["short_url"], "http://localhost:3000/1");
    assert_eq!(json["click_count"], 1);
}

#[tokio::test]
async fn test_link_details_unknown() {
    let (server, _) = common::create_test_server();

    let response = server.get("/api/links/nope").await;

    response.assert_status_not_found();
    assert_eq!(response.json::<Value>()["error"]["code"], "not_found");
}

#[tokio::test]
async fn test_health_ok() {
    let (server, _) = common::create_test_server();

    let response = server.get("/health").await;

    response.assert_status_ok();

    let json = response.json::<Value>();
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["checks"]["store"]["status"], "ok");
}

#[tokio::test]
async fn test_health_store_down() {
    let server = common::server_with_store(Arc::new(common::UnavailableStore));

    let response = server.get("/health").await;

    response.assert_status(StatusCode::SERVICE_UNAVAILABLE);

    let json = response.json::<Value>();
    assert_eq!(json["status"], "degraded");
    assert_eq!(json["checks"]["store"]["status"], "error");
}

#[tokio::test]
async fn test_store_failure_is_generic_500() {
    let server = common::server_with_store(Arc::new(common::UnavailableStore));

    let response = server
        .post("/api/shorten")
        .json(&json!({ "url": "https://example.com" }))
        .await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);

    let json = response.json::<Value>();
    assert_eq!(json["error"]["code"], "internal_error");
    assert!(!json.to_string().contains("connection refused"));
}
