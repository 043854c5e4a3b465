use crate::host::Notifier;
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use std::sync::Arc;

/// Returned in place of a URL when the search cannot be resolved.
pub const SEARCH_ERROR: &str = "Error";
pub const DEFAULT_SEARCH_ENDPOINT: &str = "https://www.googleapis.com/customsearch/v1";

/// Resolves free text to the single best matching URL.
#[async_trait]
pub trait SearchSource: Send + Sync {
    async fn resolve_first_result(&self, api_key: &str, search_engine_id: &str, query: &str)
    -> String;
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    items: Vec<SearchItem>,
}

#[derive(Debug, Deserialize)]
struct SearchItem {
    link: String,
}

/// Custom Search JSON API client.
pub struct CustomSearchResolver {
    client: Client,
    endpoint: String,
    notifier: Arc<dyn Notifier>,
}

impl CustomSearchResolver {
    pub fn new(notifier: Arc<dyn Notifier>) -> Self {
        Self::with_endpoint(DEFAULT_SEARCH_ENDPOINT, notifier)
    }

    pub fn with_endpoint(endpoint: &str, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            client: Client::new(),
            endpoint: endpoint.trim_end_matches('?').to_string(),
            notifier,
        }
    }

    async fn first_link(&self, api_key: &str, cx: &str, query: &str) -> Option<String> {
        let response = match self
            .client
            .get(&self.endpoint)
            .query(&[("key", api_key), ("cx", cx), ("q", query), ("num", "1")])
            .send()
            .await
        {
            Ok(r) => r,
            Err(e) => {
                tracing::error!(query, error = %e, "search request failed");
                return None;
            }
        };

        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        if status != StatusCode::OK {
            tracing::error!(query, status = %status, body = %body, "search API returned an error");
            return None;
        }

        match serde_json::from_str::<SearchResponse>(&body) {
            Ok(parsed) => {
                let link = parsed.items.into_iter().next().map(|item| item.link);
                if link.is_none() {
                    tracing::error!(query, "search API returned no results");
                }
                link
            }
            Err(e) => {
                tracing::error!(query, error = %e, "search API response was not understood");
                None
            }
        }
    }
}

#[async_trait]
impl SearchSource for CustomSearchResolver {
    async fn resolve_first_result(
        &self,
        api_key: &str,
        search_engine_id: &str,
        query: &str,
    ) -> String {
        match self.first_link(api_key, search_engine_id, query).await {
            Some(url) => {
                self.notifier
                    .notify(&format!("keyword: {query}\nfetched URL: {url}"));
                url
            }
            None => SEARCH_ERROR.to_string(),
        }
    }
}
