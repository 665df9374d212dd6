//! Search configuration with sensible defaults.
//!
//! [`SearchConfig`] controls the result language, timeouts, and request
//! behaviour shared by all backends. The defaults are tuned for polite
//! scraping; only the NewsAPI backend needs a key.

use crate::error::SearchError;

/// Configuration shared by all search backends.
///
/// Use [`Default::default()`] for sensible defaults, or construct with
/// field overrides for custom behaviour.
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Two-letter result language. Only the NewsAPI backend honours it;
    /// the web-search backends return results in whatever language the
    /// engine chooses for the query.
    pub language: String,
    /// Per-request HTTP timeout in seconds.
    pub timeout_seconds: u64,
    /// Whether to request safe search filtering from engines that support it.
    pub safe_search: bool,
    /// Custom User-Agent string. If `None`, rotates through a built-in list
    /// of realistic browser User-Agents.
    pub user_agent: Option<String>,
    /// API key for newsapi.org. Required only when dispatching to the
    /// NewsAPI backend; never logged.
    pub news_api_key: Option<String>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            language: "en".into(),
            timeout_seconds: 8,
            safe_search: true,
            user_agent: None,
            news_api_key: None,
        }
    }
}

impl SearchConfig {
    /// Validates this configuration, returning an error if any field is invalid.
    ///
    /// Checks:
    /// - `timeout_seconds` must be greater than 0
    /// - `language` must not be empty
    pub fn validate(&self) -> Result<(), SearchError> {
        if self.timeout_seconds == 0 {
            return Err(SearchError::Config(
                "timeout_seconds must be greater than 0".into(),
            ));
        }
        if self.language.is_empty() {
            return Err(SearchError::Config("language must not be empty".into()));
        }
        Ok(())
    }
}
