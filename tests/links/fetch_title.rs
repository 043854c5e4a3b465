use linktitle::links::fetch::{FILE_FALLBACK, HtmlTitleFetcher, SITE_UNREACHABLE};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn serve(route: &str, template: ResponseTemplate) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(template)
        .mount(&server)
        .await;
    server
}

fn html(body: &str) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_raw(body.as_bytes().to_vec(), "text/html; charset=utf-8")
}

#[tokio::test]
async fn reads_html_title() {
    let server = serve(
        "/page",
        html("<html><head><title>Example Title</title></head><body>hi</body></html>"),
    )
    .await;

    let title = HtmlTitleFetcher::new()
        .scrape_title(&format!("{}/page", server.uri()))
        .await;

    assert_eq!(title, "Example Title");
}

#[tokio::test]
async fn strips_newlines_from_title() {
    let server = serve(
        "/spaced",
        html("<html><head><title>\n   Spread\nOver Lines  \n</title></head></html>"),
    )
    .await;

    let title = HtmlTitleFetcher::new()
        .scrape_title(&format!("{}/spaced", server.uri()))
        .await;

    assert_eq!(title, "SpreadOver Lines");
}

#[tokio::test]
async fn script_rendered_page_uses_no_title_attribute() {
    let server = serve(
        "/app",
        html(r#"<html><head><title no-title="My App"></title></head></html>"#),
    )
    .await;

    let title = HtmlTitleFetcher::new()
        .scrape_title(&format!("{}/app", server.uri()))
        .await;

    assert_eq!(title, "My App");
}

#[tokio::test]
async fn untitled_page_falls_back_to_url() {
    let server = serve("/bare", html("<html><body>no head</body></html>")).await;
    let url = format!("{}/bare", server.uri());

    let title = HtmlTitleFetcher::new().scrape_title(&url).await;

    assert_eq!(title, url);
}

#[tokio::test]
async fn non_html_uses_file_name() {
    let server = serve(
        "/files/report.pdf",
        ResponseTemplate::new(200).set_body_raw(b"%PDF-1.7".to_vec(), "application/pdf"),
    )
    .await;

    let title = HtmlTitleFetcher::new()
        .scrape_title(&format!("{}/files/report.pdf", server.uri()))
        .await;

    assert_eq!(title, "report.pdf");
}

#[tokio::test]
async fn non_html_root_is_named_file() {
    let server = serve(
        "/",
        ResponseTemplate::new(200).set_body_raw(b"{}".to_vec(), "application/json"),
    )
    .await;

    let title = HtmlTitleFetcher::new()
        .scrape_title(&format!("{}/", server.uri()))
        .await;

    assert_eq!(title, FILE_FALLBACK);
}

#[tokio::test]
async fn error_status_is_unreachable() {
    let server = serve("/missing", ResponseTemplate::new(404)).await;

    let title = HtmlTitleFetcher::new()
        .scrape_title(&format!("{}/missing", server.uri()))
        .await;

    assert_eq!(title, SITE_UNREACHABLE);
}

#[tokio::test]
async fn connection_failure_is_unreachable() {
    let title = HtmlTitleFetcher::new()
        .scrape_title("http://127.0.0.1:1/nothing")
        .await;

    assert_eq!(title, SITE_UNREACHABLE);
}
