mod common;

use axum::http::StatusCode;
use shortly::domain::store::KeyValueStore;

#[tokio::test]
async fn test_create_redirects_to_details() {
    let (server, store) = common::create_test_server();

    let response = server
        .post("/create")
        .form(&[("url", "https://example.com/a/long/path")])
        .await;

    response.assert_status(StatusCode::SEE_OTHER);
    assert_eq!(response.header("location"), "/1_details");
    assert_eq!(
        store.get("url-target:1").await.unwrap().as_deref(),
        Some("https://example.com/a/long/path")
    );
}

#[tokio::test]
async fn test_create_same_url_twice_reuses_id() {
    let (server, store) = common::create_test_server();

    let first = server
        .post("/create")
        .form(&[("url", "https://example.com")])
        .await;
    let second = server
        .post("/create")
        .form(&[("url", "https://example.com")])
        .await;

    assert_eq!(first.header("location"), second.header("location"));
    assert_eq!(store.get("last-url-id").await.unwrap().as_deref(), Some("1"));
}

#[tokio::test]
async fn test_create_invalid_url_rerenders_form() {
    let (server, store) = common::create_test_server();

    let response = server
        .post("/create")
        .form(&[("url", "not a url")])
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body = response.text();
    assert!(body.contains("invalid url"));
    assert!(body.contains("not a url"));
    assert!(store.is_empty());
}

#[tokio::test]
async fn test_create_rejects_url_with_newline() {
    let (server, store) = common::create_test_server();

    let response = server
        .post("/create")
        .form(&[("url", "https://example.com/a\nb")])
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert!(response.text().contains("invalid url"));
    assert!(store.is_empty());
}

#[tokio::test]
async fn test_follow_unsendable_target_is_not_counted() {
    let (server, store) = common::create_test_server();

    store.set("last-url-id", "1").await.unwrap();
    store
        .set("url-target:1", "https://example.com/a\nb")
        .await
        .unwrap();

    let response = server.get("/1").await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    assert!(response.text().contains("Something went wrong"));
    assert_eq!(store.get("click-count:1").await.unwrap(), None);
}

#[tokio::test]
async fn test_create_page_renders() {
    let (server, _) = common::create_test_server();

    let response = server.get("/create").await;

    response.assert_status_ok();
    assert!(response.text().contains("<form method=\"post\" action=\"/create\">"));
}

#[tokio::test]
async fn test_follow_redirects_and_counts() {
    let (server, store) = common::create_test_server();

    server
        .post("/create")
        .form(&[("url", "https://example.com/target")])
        .await;

    for _ in 0..3 {
        let response = server.get("/1").await;

        response.assert_status(StatusCode::TEMPORARY_REDIRECT);
        assert_eq!(response.header("location"), "https://example.com/target");
    }

    assert_eq!(store.get("click-count:1").await.unwrap().as_deref(), Some("3"));
}

#[tokio::test]
async fn test_follow_unknown_is_404_and_not_counted() {
    let (server, store) = common::create_test_server();

    let response = server.get("/doesnotexist").await;

    response.assert_status_not_found();
    assert!(response.text().contains("404"));
    assert_eq!(store.get("click-count:doesnotexist").await.unwrap(), None);
}

#[tokio::test]
async fn test_details_shows_target_and_clicks() {
    let (server, _) = common::create_test_server();

    server
        .post("/create")
        .form(&[("url", "https://www.example.com/page")])
        .await;
    server.get("/1").await;
    server.get("/1").await;

    let response = server.get("/1_details").await;

    response.assert_status_ok();
    let body = response.text();
    assert!(body.contains("https://www.example.com/page"));
    assert!(body.contains("www.example.com"));
    assert!(body.contains("http://localhost:3000/1"));
    assert!(body.contains("<dd class=\"clicks\">2</dd>"));
}

#[tokio::test]
async fn test_details_does_not_count() {
    let (server, store) = common::create_test_server();

    server
        .post("/create")
        .form(&[("url", "https://example.com")])
        .await;
    server.get("/1_details").await;

    assert_eq!(store.get("click-count:1").await.unwrap(), None);
}

#[tokio::test]
async fn test_details_unknown_is_404() {
    let (server, _) = common::create_test_server();

    server.get("/zz_details").await.assert_status_not_found();
}

#[tokio::test]
async fn test_list_newest_first() {
    let (server, _) = common::create_test_server();

    for url in ["https://one.example", "https://two.example"] {
        server.post("/create").form(&[("url", url)]).await;
    }

    let response = server.get("/short_link_list").await;

    response.assert_status_ok();
    let body = response.text();
    let two = body.find("https://two.example").unwrap();
    let one = body.find("https://one.example").unwrap();
    assert!(two < one);
    assert!(body.contains("/2_details"));
}

#[tokio::test]
async fn test_list_past_nine_links() {
    let (server, _) = common::create_test_server();

    for n in 0..11 {
        server
            .post("/create")
            .form(&[("url", format!("https://example.com/{n}"))])
            .await;
    }

    let response = server.get("/short_link_list").await;

    response.assert_status_ok();
    let body = response.text();
    assert!(body.contains("/b_details"));
    assert!(body.contains("https://example.com/10"));
}

#[tokio::test]
async fn test_list_empty() {
    let (server, _) = common::create_test_server();

    let response = server.get("/short_link_list").await;

    response.assert_status_ok();
    assert!(response.text().contains("No links yet"));
}

#[tokio::test]
async fn test_store_failure_renders_error_page() {
    let server = common::server_with_store(std::sync::Arc::new(common::UnavailableStore));

    let response = server.get("/short_link_list").await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    let body = response.text();
    assert!(body.contains("Something went wrong"));
    assert!(!body.contains("connection refused"));
}

#[tokio::test]
async fn test_unknown_nested_path_is_404() {
    let (server, _) = common::create_test_server();

    server.get("/no/such/page").await.assert_status_not_found();
}

#[tokio::test]
async fn test_home_page_anonymous() {
    let (server, _) = common::create_test_server();

    let response = server.get("/home").await;

    response.assert_status_ok();
    assert!(response.text().contains("Welcome to Shortly"));
}
