//! NewsAPI backend — news article search via the newsapi.org JSON API.
//!
//! The only keyed backend, and the only one that honours the configured
//! result language. A single request against the `everything` endpoint
//! sorted by relevancy, no pagination.

use crate::backend::SearchBackendTrait;
use crate::config::SearchConfig;
use crate::error::SearchError;
use crate::types::Backend;
use serde::Deserialize;

const EVERYTHING_ENDPOINT: &str = "https://newsapi.org/v2/everything";

/// NewsAPI `everything` search adapter.
///
/// Requires `news_api_key` in the config. An API-level failure
/// (`status: "error"` in the body, which NewsAPI also uses for 4xx/5xx
/// responses) is reported as zero results, not an error — callers cannot
/// distinguish it from a query with no matching articles.
pub struct NewsApiBackend;

/// Top-level `everything` response body.
///
/// On success `status` is `"ok"` and `articles` is populated; on failure
/// `status` is `"error"` with `code` and `message` set.
#[derive(Debug, Deserialize)]
struct EverythingResponse {
    status: String,
    #[serde(default)]
    articles: Vec<Article>,
    #[serde(default)]
    code: Option<String>,
    #[serde(default)]
    message: Option<String>,
}

/// A single article entry. Only the URL is used downstream.
#[derive(Debug, Deserialize)]
struct Article {
    url: String,
}

impl SearchBackendTrait for NewsApiBackend {
    async fn fetch(
        &self,
        client: &reqwest::Client,
        query: &str,
        config: &SearchConfig,
    ) -> Result<Vec<String>, SearchError> {
        tracing::trace!(query, language = %config.language, "NewsAPI search");

        let api_key = config.news_api_key.as_deref().ok_or_else(|| {
            SearchError::Config("news_api_key is required for the newsapi backend".into())
        })?;

        let response = client
            .get(EVERYTHING_ENDPOINT)
            .query(&[
                ("q", query),
                ("language", config.language.as_str()),
                ("sortBy", "relevancy"),
            ])
            .header("X-Api-Key", api_key)
            .send()
            .await
            .map_err(|e| SearchError::Http(format!("NewsAPI request failed: {e}")))?;

        let body = response
            .text()
            .await
            .map_err(|e| SearchError::Http(format!("NewsAPI response read failed: {e}")))?;

        parse_everything_response(&body)
    }

    fn backend_type(&self) -> Backend {
        Backend::NewsApi
    }
}

/// Parse an `everything` response body into article URLs, in API order.
///
/// `status: "error"` maps to an empty list with a warn log. Bodies that
/// are not valid NewsAPI JSON are a typed parse error.
pub(crate) fn parse_everything_response(body: &str) -> Result<Vec<String>, SearchError> {
    let response: EverythingResponse = serde_json::from_str(body)
        .map_err(|e| SearchError::Parse(format!("NewsAPI response is not valid JSON: {e}")))?;

    if response.status == "error" {
        tracing::warn!(
            code = response.code.as_deref().unwrap_or("unknown"),
            message = response.message.as_deref().unwrap_or(""),
            "NewsAPI returned an error status; treating as no results"
        );
        return Ok(Vec::new());
    }

    let urls: Vec<String> = response
        .articles
        .into_iter()
        .map(|article| article.url)
        .collect();

    tracing::debug!(count = urls.len(), "NewsAPI articles parsed");
    Ok(urls)
}
