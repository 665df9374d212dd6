//! Backend identification for search dispatch.

use crate::error::SearchError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Search backends that linkscout can dispatch a query to.
///
/// The set is closed: callers select a backend by name and anything
/// outside this enum is rejected by [`Backend::parse`]. Google is the
/// canonical default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Backend {
    /// Google — the general-purpose default backend.
    #[default]
    Google,
    /// Bing — secondary web index, useful when Google blocks requests.
    Bing,
    /// DuckDuckGo — privacy-aligned, most scraper-friendly.
    DuckDuckGo,
    /// NewsAPI — news article search via the newsapi.org JSON API.
    NewsApi,
}

impl Backend {
    /// Returns the lowercase wire name of this backend, as accepted by
    /// [`Backend::parse`].
    pub fn name(&self) -> &'static str {
        match self {
            Self::Google => "google",
            Self::Bing => "bing",
            Self::DuckDuckGo => "duckduckgo",
            Self::NewsApi => "newsapi",
        }
    }

    /// Returns all available backend variants.
    pub fn all() -> &'static [Backend] {
        &[Self::Google, Self::Bing, Self::DuckDuckGo, Self::NewsApi]
    }

    /// Parse a backend name, case-insensitively.
    ///
    /// Unknown names are a typed error rather than a silent fallback;
    /// the orchestrator decides whether to default or reject.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::UnknownBackend`] if `name` is not one of
    /// the supported backend names.
    pub fn parse(name: &str) -> Result<Backend, SearchError> {
        match name.to_lowercase().as_str() {
            "google" => Ok(Self::Google),
            "bing" => Ok(Self::Bing),
            "duckduckgo" => Ok(Self::DuckDuckGo),
            "newsapi" => Ok(Self::NewsApi),
            other => Err(SearchError::UnknownBackend(other.to_string())),
        }
    }
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Backend {
    type Err = SearchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
