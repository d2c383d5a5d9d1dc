use async_trait::async_trait;
use std::time::Duration;
use tracing::{debug, warn};

use super::types::{OmdbSearchResponse, SearchResults};
use crate::config::OmdbConfig;
use crate::error::{MovieError, MovieResult};

pub const DEFAULT_BASE_URL: &str = "http://www.omdbapi.com/";

/// OMDb refuses to page past 100.
pub const MAX_SEARCH_PAGE: u32 = 100;

/// Title search against an external movie database.
#[async_trait]
pub trait MovieSearch: Send + Sync {
    async fn search(&self, title: &str, page: u32) -> MovieResult<SearchResults>;
}

pub struct OmdbClient {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl OmdbClient {
    pub fn new(config: &OmdbConfig) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout))
            .build()?;
        Ok(Self::with_client(
            client,
            &config.baseurl,
            config.apikey.as_deref().unwrap_or_default(),
        ))
    }

    pub fn with_client(client: reqwest::Client, base_url: &str, api_key: &str) -> Self {
        Self {
            client,
            base_url: base_url.to_string(),
            api_key: api_key.to_string(),
        }
    }
}

#[async_trait]
impl MovieSearch for OmdbClient {
    async fn search(&self, title: &str, page: u32) -> MovieResult<SearchResults> {
        if title.trim().is_empty() {
            return Err(MovieError::validation("Search title is required"));
        }
        if !(1..=MAX_SEARCH_PAGE).contains(&page) {
            return Err(MovieError::validation(format!(
                "Page must be between 1 and {}",
                MAX_SEARCH_PAGE
            )));
        }

        let page_str = page.to_string();
        let response = self
            .client
            .get(&self.base_url)
            .query(&[
                ("apikey", self.api_key.as_str()),
                ("s", title),
                ("page", page_str.as_str()),
            ])
            .send()
            .await
            .map_err(|e| {
                warn!(error = %e, "OMDb request failed");
                upstream_unavailable()
            })?;

        let status = response.status();
        if status == reqwest::StatusCode::UNAUTHORIZED {
            return Err(MovieError::Authentication("Invalid API key".to_string()));
        }
        if !status.is_success() {
            warn!(status = status.as_u16(), "OMDb returned an error status");
            return Err(upstream_unavailable());
        }

        let body: OmdbSearchResponse = response.json().await.map_err(|e| {
            warn!(error = %e, "OMDb returned an unreadable body");
            upstream_unavailable()
        })?;

        if body.is_empty_result() {
            debug!(title, page, reason = ?body.error, "OMDb search had no results");
        }
        Ok(body.into_results())
    }
}

fn upstream_unavailable() -> MovieError {
    MovieError::UpstreamUnavailable("Failed to fetch movies from OMDb API".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> OmdbClient {
        // Nothing listens here; validation must fail before any request.
        OmdbClient::with_client(reqwest::Client::new(), "http://127.0.0.1:9/", "key")
    }

    #[tokio::test]
    async fn test_search_validates_before_calling_out() {
        let c = client();
        assert!(matches!(c.search("  ", 1).await, Err(MovieError::Validation(_))));
        assert!(matches!(c.search("Matrix", 0).await, Err(MovieError::Validation(_))));
        assert!(matches!(c.search("Matrix", 101).await, Err(MovieError::Validation(_))));
    }

    #[tokio::test]
    async fn test_unreachable_upstream() {
        let c = client();
        assert!(matches!(
            c.search("Matrix", 1).await,
            Err(MovieError::UpstreamUnavailable(_))
        ));
    }
}
