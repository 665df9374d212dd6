//! Search orchestrator: resolve backend, dispatch, filter, truncate.
//!
//! [`Searcher`] owns the HTTP client (built once at construction, shared
//! read-only by every backend) and runs the per-query pipeline: resolve
//! the requested backend name, issue exactly one outbound request, drop
//! blacklisted URLs, and cap the result list.

use crate::backend::SearchBackendTrait;
use crate::backends::{BingBackend, DuckDuckGoBackend, GoogleBackend, NewsApiBackend};
use crate::config::SearchConfig;
use crate::error::SearchError;
use crate::filter::filter_urls;
use crate::http;
use crate::types::Backend;

/// Backend-dispatching search orchestrator.
///
/// Construct once and reuse across queries; the HTTP client keeps its
/// cookie jar and connection pool warm between calls. `Searcher` is
/// immutable after construction and safe to share across tasks.
pub struct Searcher {
    client: reqwest::Client,
    config: SearchConfig,
}

impl Searcher {
    /// Build a searcher from a validated config.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::Config`] if the config is invalid, or
    /// [`SearchError::Http`] if the HTTP client cannot be constructed.
    pub fn new(config: SearchConfig) -> Result<Self, SearchError> {
        config.validate()?;
        let client = http::build_client(&config)?;
        Ok(Self { client, config })
    }

    /// Returns the configuration this searcher was built with.
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Search by backend name, returning at most `n_links` crawlable URLs.
    ///
    /// The name is matched case-insensitively. Unknown names fall back to
    /// the default backend (Google) with a warning — the historical
    /// behaviour callers depend on. Use [`Searcher::search_backend`] to
    /// surface the parse error instead.
    ///
    /// # Errors
    ///
    /// Propagates backend transport and parse failures unmodified; there
    /// is no retry.
    pub async fn search(
        &self,
        query: &str,
        n_links: usize,
        backend_name: &str,
    ) -> Result<Vec<String>, SearchError> {
        let backend = match Backend::parse(backend_name) {
            Ok(backend) => backend,
            Err(err) => {
                tracing::warn!(
                    requested = backend_name,
                    fallback = %Backend::default(),
                    %err,
                    "unknown backend name, using default"
                );
                Backend::default()
            }
        };
        self.search_backend(query, n_links, backend).await
    }

    /// Search a specific backend, returning at most `n_links` crawlable URLs.
    ///
    /// Pipeline: dispatch one request to `backend`, blacklist-filter the
    /// raw URLs, truncate to `n_links`. Relative order is the backend's
    /// own ranking throughout. A cap of 0 short-circuits to an empty list
    /// without touching the network.
    ///
    /// # Errors
    ///
    /// Same as [`Searcher::search`].
    pub async fn search_backend(
        &self,
        query: &str,
        n_links: usize,
        backend: Backend,
    ) -> Result<Vec<String>, SearchError> {
        if n_links == 0 {
            return Ok(Vec::new());
        }

        tracing::trace!(query, n_links, %backend, "dispatching search");

        let raw = self.dispatch(backend, query).await?;
        let urls = cap_results(raw, n_links);

        tracing::debug!(count = urls.len(), %backend, "search complete");
        Ok(urls)
    }

    /// Dispatch the query to the concrete backend implementation.
    async fn dispatch(&self, backend: Backend, query: &str) -> Result<Vec<String>, SearchError> {
        match backend {
            Backend::Google => GoogleBackend.fetch(&self.client, query, &self.config).await,
            Backend::Bing => BingBackend.fetch(&self.client, query, &self.config).await,
            Backend::DuckDuckGo => {
                DuckDuckGoBackend
                    .fetch(&self.client, query, &self.config)
                    .await
            }
            Backend::NewsApi => {
                NewsApiBackend
                    .fetch(&self.client, query, &self.config)
                    .await
            }
        }
    }
}

/// Filter raw backend URLs and truncate to the caller's cap.
fn cap_results(raw: Vec<String>, n_links: usize) -> Vec<String> {
    let mut urls = filter_urls(raw);
    urls.truncate(n_links);
    urls
}

#[cfg(test)]
mod tests {
    use super::*;

    fn urls(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn new_rejects_invalid_config() {
        let config = SearchConfig {
            timeout_seconds: 0,
            ..Default::default()
        };
        assert!(Searcher::new(config).is_err());
    }

    #[test]
    fn new_accepts_default_config() {
        let searcher = Searcher::new(SearchConfig::default());
        assert!(searcher.is_ok());
    }

    #[test]
    fn config_accessor_reflects_input() {
        let config = SearchConfig {
            language: "fr".into(),
            ..Default::default()
        };
        let searcher = Searcher::new(config).expect("searcher");
        assert_eq!(searcher.config().language, "fr");
    }

    #[tokio::test]
    async fn zero_cap_returns_empty_without_network() {
        // No mock server needed: the cap short-circuits before dispatch.
        let searcher = Searcher::new(SearchConfig::default()).expect("searcher");
        for &backend in Backend::all() {
            let result = searcher.search_backend("anything", 0, backend).await;
            assert!(result.expect("should short-circuit").is_empty());
        }
    }

    #[tokio::test]
    async fn zero_cap_by_name_returns_empty() {
        let searcher = Searcher::new(SearchConfig::default()).expect("searcher");
        let result = searcher.search("anything", 0, "NEWSAPI").await;
        assert!(result.expect("should short-circuit").is_empty());
    }

    #[test]
    fn cap_results_filters_then_truncates() {
        let raw = urls(&[
            "https://a.com/story",
            "https://www.youtube.com/watch?v=1",
            "https://b.com/story",
            "https://c.com/story",
            "https://d.com/story",
        ]);
        let capped = cap_results(raw, 3);
        assert_eq!(
            capped,
            urls(&[
                "https://a.com/story",
                "https://b.com/story",
                "https://c.com/story",
            ])
        );
    }

    #[test]
    fn cap_results_returns_all_when_fewer_than_cap() {
        let raw = urls(&["https://a.com", "https://b.com"]);
        let capped = cap_results(raw, 10);
        assert_eq!(capped.len(), 2);
    }

    #[test]
    fn cap_results_never_exceeds_cap() {
        let raw: Vec<String> = (0..50).map(|i| format!("https://site{i}.com")).collect();
        assert_eq!(cap_results(raw, 7).len(), 7);
    }

    #[test]
    fn cap_results_empty_input() {
        assert!(cap_results(Vec::new(), 5).is_empty());
    }
}
