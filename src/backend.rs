//! Trait definition for pluggable search backends.
//!
//! Each backend (Google, Bing, DuckDuckGo, NewsAPI) implements
//! [`SearchBackendTrait`] to provide a uniform interface for turning a
//! query into an ordered list of result URLs.

use crate::config::SearchConfig;
use crate::error::SearchError;
use crate::types::Backend;

/// A pluggable search backend.
///
/// Implementors turn a query into URLs via a single outbound request,
/// either by scraping an engine's HTML results page or by calling a JSON
/// API. The signature is deliberately uniform: backends that have no use
/// for `config.language` (the web engines) simply ignore it, so the
/// orchestrator never has to build differently-shaped calls per backend.
///
/// Returned URLs keep the backend's own relevance order; linkscout does
/// no re-ranking of its own.
///
/// All implementations must be `Send + Sync`.
pub trait SearchBackendTrait: Send + Sync {
    /// Fetch result URLs for a query.
    ///
    /// # Arguments
    ///
    /// * `client` — Shared HTTP client, built once by the orchestrator.
    /// * `query` — The search query (the implementation handles encoding).
    /// * `config` — Search configuration (timeouts, language, credentials).
    ///
    /// # Errors
    ///
    /// Returns [`SearchError`] if the request fails or the response cannot
    /// be parsed.
    fn fetch(
        &self,
        client: &reqwest::Client,
        query: &str,
        config: &SearchConfig,
    ) -> impl std::future::Future<Output = Result<Vec<String>, SearchError>> + Send;

    /// Returns which [`Backend`] variant this implementation represents.
    fn backend_type(&self) -> Backend;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http;

    /// A mock backend for testing trait bounds and async execution.
    struct MockBackend {
        backend: Backend,
        urls: Vec<String>,
    }

    impl MockBackend {
        fn new(backend: Backend, urls: Vec<String>) -> Self {
            Self { backend, urls }
        }

        fn failing(backend: Backend) -> Self {
            Self {
                backend,
                urls: vec![],
            }
        }
    }

    impl SearchBackendTrait for MockBackend {
        async fn fetch(
            &self,
            _client: &reqwest::Client,
            _query: &str,
            _config: &SearchConfig,
        ) -> Result<Vec<String>, SearchError> {
            if self.urls.is_empty() {
                return Err(SearchError::Parse("mock backend failure".into()));
            }
            Ok(self.urls.clone())
        }

        fn backend_type(&self) -> Backend {
            self.backend
        }
    }

    #[test]
    fn mock_backend_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<MockBackend>();
    }

    #[tokio::test]
    async fn mock_backend_returns_urls() {
        let backend = MockBackend::new(
            Backend::DuckDuckGo,
            vec!["https://example.com/".to_string()],
        );
        let config = SearchConfig::default();
        let client = http::build_client(&config).expect("client");

        let urls = backend.fetch(&client, "test", &config).await;
        assert!(urls.is_ok());

        let urls = urls.expect("should succeed");
        assert_eq!(urls, vec!["https://example.com/".to_string()]);
    }

    #[tokio::test]
    async fn mock_backend_propagates_errors() {
        let backend = MockBackend::failing(Backend::Google);
        let config = SearchConfig::default();
        let client = http::build_client(&config).expect("client");

        let result = backend.fetch(&client, "test", &config).await;
        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("mock backend failure"));
    }

    #[test]
    fn backend_type_returns_correct_variant() {
        let backend = MockBackend::new(Backend::Bing, vec![]);
        assert_eq!(backend.backend_type(), Backend::Bing);
    }
}
