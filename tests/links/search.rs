use std::sync::Arc;

use linktitle::host::RecordingNotifier;
use linktitle::links::{CustomSearchResolver, SEARCH_ERROR, SearchSource};
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn resolver(server: &MockServer, notifier: Arc<RecordingNotifier>) -> CustomSearchResolver {
    CustomSearchResolver::with_endpoint(&format!("{}/customsearch/v1", server.uri()), notifier)
}

#[tokio::test]
async fn returns_first_link_and_notifies() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/customsearch/v1"))
        .and(query_param("key", "k"))
        .and(query_param("cx", "engine"))
        .and(query_param("q", "rust book"))
        .and(query_param("num", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "items": [
                { "link": "https://doc.rust-lang.org/book/", "title": "The Book" },
                { "link": "https://example.com/second" }
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;
    let notifier = Arc::new(RecordingNotifier::default());

    let url = resolver(&server, notifier.clone())
        .resolve_first_result("k", "engine", "rust book")
        .await;

    assert_eq!(url, "https://doc.rust-lang.org/book/");
    assert_eq!(
        notifier.messages(),
        vec!["keyword: rust book\nfetched URL: https://doc.rust-lang.org/book/"]
    );
}

#[tokio::test]
async fn non_ok_status_returns_error_sentinel() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/customsearch/v1"))
        .respond_with(ResponseTemplate::new(403).set_body_string("quota exceeded"))
        .mount(&server)
        .await;
    let notifier = Arc::new(RecordingNotifier::default());

    let url = resolver(&server, notifier.clone())
        .resolve_first_result("k", "engine", "anything")
        .await;

    assert_eq!(url, SEARCH_ERROR);
    assert!(notifier.messages().is_empty());
}

#[tokio::test]
async fn empty_result_set_returns_error_sentinel() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/customsearch/v1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "kind": "customsearch#search" })))
        .mount(&server)
        .await;

    let url = resolver(&server, Arc::new(RecordingNotifier::default()))
        .resolve_first_result("k", "engine", "zzzzqqq")
        .await;

    assert_eq!(url, SEARCH_ERROR);
}

#[tokio::test]
async fn malformed_body_returns_error_sentinel() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/customsearch/v1"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>not json</html>"))
        .mount(&server)
        .await;
    let notifier = Arc::new(RecordingNotifier::default());

    let url = resolver(&server, notifier.clone())
        .resolve_first_result("k", "engine", "rust")
        .await;

    assert_eq!(url, SEARCH_ERROR);
    assert!(notifier.messages().is_empty());
}

#[tokio::test]
async fn unreachable_endpoint_returns_error_sentinel() {
    let notifier = Arc::new(RecordingNotifier::default());
    let resolver =
        CustomSearchResolver::with_endpoint("http://127.0.0.1:1/customsearch/v1", notifier.clone());

    let url = resolver.resolve_first_result("k", "engine", "rust").await;

    assert_eq!(url, SEARCH_ERROR);
    assert!(notifier.messages().is_empty());
}
