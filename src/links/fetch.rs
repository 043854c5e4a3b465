use anyhow::Result;
use async_trait::async_trait;
use reqwest::Client;
use scraper::{Html, Selector};
use url::Url;

/// Title used when the page cannot be fetched or parsed.
pub const SITE_UNREACHABLE: &str = "Site Unreachable";
/// Title used for a non-HTML resource whose path has no usable segment.
pub const FILE_FALLBACK: &str = "File";

/// Something that can name the page behind a URL.
///
/// The HTTP scraper never fails; a rendering host (a browser that runs the
/// page's scripts first) may, and the converter turns that into sentinel text.
#[async_trait]
pub trait TitleSource: Send + Sync {
    async fn fetch_title(&self, url: &str) -> Result<String>;
}

/// Fetches a page over HTTP and reads its `<title>`.
#[derive(Debug, Clone)]
pub struct HtmlTitleFetcher {
    client: Client,
}

impl HtmlTitleFetcher {
    pub fn new() -> Self {
        let client = Client::builder()
            .user_agent(concat!("linktitle/", env!("CARGO_PKG_VERSION")))
            .redirect(reqwest::redirect::Policy::limited(10))
            .build()
            .unwrap_or_else(|_| Client::new());
        Self { client }
    }

    pub fn with_client(client: Client) -> Self {
        Self { client }
    }

    /// Title of the page at `url`, degraded to sentinel text on any failure.
    pub async fn scrape_title(&self, url: &str) -> String {
        let target = normalize_url(url);
        match self.scrape(&target, url).await {
            Ok(title) => clean_title(&title),
            Err(e) => {
                tracing::warn!(url = %target, error = %e, "title fetch failed");
                SITE_UNREACHABLE.to_string()
            }
        }
    }

    async fn scrape(&self, target: &str, original: &str) -> Result<String> {
        let response = self.client.get(target).send().await?.error_for_status()?;

        let is_html = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .is_some_and(|ct| ct.contains("text/html"));
        if !is_html {
            return Ok(final_path_segment(target));
        }

        let body = response.text().await?;
        Ok(title_from_html(&body).unwrap_or_else(|| original.to_string()))
    }
}

impl Default for HtmlTitleFetcher {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TitleSource for HtmlTitleFetcher {
    async fn fetch_title(&self, url: &str) -> Result<String> {
        Ok(self.scrape_title(url).await)
    }
}

/// Prefix `https://` when `url` carries no http(s) scheme.
pub fn normalize_url(url: &str) -> String {
    if url.starts_with("http://") || url.starts_with("https://") {
        url.to_string()
    } else {
        format!("https://{url}")
    }
}

/// `<title>` text, or the `no-title` attribute script-rendered pages put on
/// an empty title element.
pub fn title_from_html(html: &str) -> Option<String> {
    let document = Html::parse_document(html);
    let selector = Selector::parse("title").ok()?;
    let element = document.select(&selector).next()?;

    let text: String = element.text().collect();
    if !text.trim().is_empty() {
        return Some(text);
    }

    element
        .value()
        .attr("no-title")
        .filter(|t| !t.trim().is_empty())
        .map(String::from)
}

/// Last non-empty path segment, used to name files.
pub fn final_path_segment(url: &str) -> String {
    Url::parse(url)
        .ok()
        .and_then(|u| {
            u.path_segments()?
                .rev()
                .find(|s| !s.is_empty())
                .map(String::from)
        })
        .unwrap_or_else(|| FILE_FALLBACK.to_string())
}

/// Drop line breaks and surrounding whitespace.
pub fn clean_title(title: &str) -> String {
    title.replace(['\r', '\n'], "").trim().to_string()
}
