//! DuckDuckGo backend — most scraper-friendly, privacy-aligned.
//!
//! Uses the HTML-only version at `https://html.duckduckgo.com/html/`
//! which requires no JavaScript and is tolerant of automated requests.

use crate::backend::SearchBackendTrait;
use crate::config::SearchConfig;
use crate::error::SearchError;
use crate::types::Backend;
use scraper::{Html, Selector};
use url::Url;

/// DuckDuckGo HTML search scraper.
///
/// The "private search" choice: no query logging on the engine side and
/// the most reliable endpoint for automated requests. Uses a POST to the
/// HTML-only endpoint.
pub struct DuckDuckGoBackend;

impl DuckDuckGoBackend {
    /// Extract the actual URL from DuckDuckGo's redirect wrapper.
    ///
    /// DDG wraps URLs like: `//duckduckgo.com/l/?uddg=https%3A%2F%2Fexample.com&rut=...`
    /// We parse out the `uddg` query parameter and URL-decode it.
    fn extract_url(href: &str) -> Option<String> {
        // Handle protocol-relative URLs
        let full_href = if href.starts_with("//") {
            format!("https:{href}")
        } else {
            href.to_string()
        };

        let parsed = Url::parse(&full_href).ok()?;

        // Check if this is a DDG redirect
        if parsed.host_str() == Some("duckduckgo.com") && parsed.path().starts_with("/l/") {
            parsed
                .query_pairs()
                .find(|(key, _)| key == "uddg")
                .map(|(_, value)| value.into_owned())
        } else {
            Some(full_href)
        }
    }
}

impl SearchBackendTrait for DuckDuckGoBackend {
    async fn fetch(
        &self,
        client: &reqwest::Client,
        query: &str,
        config: &SearchConfig,
    ) -> Result<Vec<String>, SearchError> {
        tracing::trace!(query, "DuckDuckGo search");

        let mut params = vec![("q", query)];
        if config.safe_search {
            params.push(("kp", "1"));
        }

        let response = client
            .post("https://html.duckduckgo.com/html/")
            .form(&params)
            .header("Accept-Language", "en-US,en;q=0.9")
            .send()
            .await
            .map_err(|e| SearchError::Http(format!("DuckDuckGo request failed: {e}")))?
            .error_for_status()
            .map_err(|e| SearchError::Http(format!("DuckDuckGo HTTP error: {e}")))?;

        let html = response
            .text()
            .await
            .map_err(|e| SearchError::Http(format!("DuckDuckGo response read failed: {e}")))?;

        tracing::trace!(bytes = html.len(), "DuckDuckGo response received");

        parse_duckduckgo_html(&html)
    }

    fn backend_type(&self) -> Backend {
        Backend::DuckDuckGo
    }
}

/// Parse DuckDuckGo HTML into result URLs, in page order.
///
/// Extracted as a separate function for testability with mock HTML.
pub(crate) fn parse_duckduckgo_html(html: &str) -> Result<Vec<String>, SearchError> {
    let document = Html::parse_document(html);

    let result_sel = Selector::parse(
        ".result.results_links.results_links_deep:not(.result--ad), .web-result:not(.result--ad)",
    )
    .map_err(|e| SearchError::Parse(format!("invalid result selector: {e:?}")))?;
    let link_sel = Selector::parse(".result__a")
        .map_err(|e| SearchError::Parse(format!("invalid link selector: {e:?}")))?;

    let mut urls = Vec::new();

    for element in document.select(&result_sel) {
        let href = match element
            .select(&link_sel)
            .next()
            .and_then(|a| a.value().attr("href"))
        {
            Some(h) => h,
            None => continue,
        };

        if let Some(url) = DuckDuckGoBackend::extract_url(href) {
            urls.push(url);
        }
    }

    tracing::debug!(count = urls.len(), "DuckDuckGo results parsed");
    Ok(urls)
}
