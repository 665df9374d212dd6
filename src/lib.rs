//! # linkscout
//!
//! Backend-dispatched web search that returns crawlable URL lists.
//!
//! This crate takes a textual query, sends it to one of several search
//! backends — Google, Bing, DuckDuckGo, or NewsAPI — and returns a
//! bounded, blacklist-filtered list of URLs suitable for downstream
//! crawling. It is an integration layer, not a crawler: exactly one
//! outbound request per query, no caching, no retries, and no re-ranking
//! beyond the order the backend itself produced.
//!
//! ## Design
//!
//! - One uniform backend trait; the web engines are scraped via CSS
//!   selectors, NewsAPI is a keyed JSON API
//! - Backend selected by name, case-insensitively; unknown names fall
//!   back to Google with a logged warning
//! - Result URLs pass through a static substring blacklist before being
//!   truncated to the caller's cap
//!
//! ## Security
//!
//! - The NewsAPI key never appears in logs or error messages
//! - No network listeners — this is a library, not a server
//! - Search queries are logged only at trace level

pub mod backend;
pub mod backends;
pub mod config;
pub mod error;
pub mod filter;
pub mod http;
pub mod searcher;
pub mod types;

pub use backend::SearchBackendTrait;
pub use config::SearchConfig;
pub use error::{Result, SearchError};
pub use filter::filter_urls;
pub use searcher::Searcher;
pub use types::Backend;

/// Search by backend name and return at most `n_links` crawlable URLs.
///
/// Builds a one-off [`Searcher`] from `config` and runs the full
/// pipeline: resolve `backend_name` (unknown names fall back to Google
/// with a warning), dispatch the query, blacklist-filter the raw URLs,
/// truncate to `n_links`. Callers issuing many queries should construct
/// a [`Searcher`] themselves to reuse its HTTP client.
///
/// # Errors
///
/// Returns [`SearchError::Config`] for an invalid config and propagates
/// backend transport/parse failures unmodified.
///
/// # Examples
///
/// ```no_run
/// # async fn example() -> linkscout::Result<()> {
/// let config = linkscout::SearchConfig::default();
/// let urls = linkscout::search("climate policy", 5, "duckduckgo", &config).await?;
/// for url in &urls {
///     println!("{url}");
/// }
/// # Ok(())
/// # }
/// ```
pub async fn search(
    query: &str,
    n_links: usize,
    backend_name: &str,
    config: &SearchConfig,
) -> Result<Vec<String>> {
    let searcher = Searcher::new(config.clone())?;
    searcher.search(query, n_links, backend_name).await
}

/// Search with the default backend (Google) and default configuration.
///
/// Convenience wrapper around [`search`].
///
/// # Errors
///
/// Same as [`search`].
///
/// # Examples
///
/// ```no_run
/// # async fn example() -> linkscout::Result<()> {
/// let urls = linkscout::search_default("rust programming", 10).await?;
/// # Ok(())
/// # }
/// ```
pub async fn search_default(query: &str, n_links: usize) -> Result<Vec<String>> {
    search(query, n_links, Backend::default().name(), &SearchConfig::default()).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn search_validates_config_zero_timeout() {
        let config = SearchConfig {
            timeout_seconds: 0,
            ..Default::default()
        };
        let result = search("test", 5, "google", &config).await;
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("timeout"));
    }

    #[tokio::test]
    async fn search_validates_config_empty_language() {
        let config = SearchConfig {
            language: String::new(),
            ..Default::default()
        };
        let result = search("test", 5, "google", &config).await;
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("language"));
    }

    #[tokio::test]
    async fn search_zero_links_returns_empty() {
        // Short-circuits before any network call, so safe in unit tests.
        let result = search("test", 0, "bing", &SearchConfig::default()).await;
        assert!(result.expect("should succeed").is_empty());
    }

    #[tokio::test]
    async fn search_zero_links_with_unknown_backend_still_empty() {
        let result = search("test", 0, "askjeeves", &SearchConfig::default()).await;
        assert!(result.expect("should succeed").is_empty());
    }
}
