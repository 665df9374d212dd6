//! Bing backend — secondary web index with Microsoft's crawler.
//!
//! Bing sometimes base64-encodes redirect URLs; organic result anchors
//! in `li.b_algo h2` still carry the plain target in `href`.

use crate::backend::SearchBackendTrait;
use crate::config::SearchConfig;
use crate::error::SearchError;
use crate::types::Backend;
use scraper::{Html, Selector};

/// Bing HTML search scraper.
///
/// The secondary engine: a different index from Google, useful when the
/// default backend is rate limiting or IP banning the caller.
pub struct BingBackend;

impl SearchBackendTrait for BingBackend {
    async fn fetch(
        &self,
        client: &reqwest::Client,
        query: &str,
        config: &SearchConfig,
    ) -> Result<Vec<String>, SearchError> {
        tracing::trace!(query, "Bing search");

        let safesearch_val = if config.safe_search { "Strict" } else { "Off" };

        let response = client
            .get("https://www.bing.com/search")
            .query(&[
                ("q", query),
                ("setlang", "en"),
                ("safeSearch", safesearch_val),
            ])
            .header("Accept", "text/html,application/xhtml+xml")
            .header("Accept-Language", "en-US,en;q=0.9")
            .send()
            .await
            .map_err(|e| SearchError::Http(format!("Bing request failed: {e}")))?
            .error_for_status()
            .map_err(|e| SearchError::Http(format!("Bing HTTP error: {e}")))?;

        let html = response
            .text()
            .await
            .map_err(|e| SearchError::Http(format!("Bing response read failed: {e}")))?;

        tracing::trace!(bytes = html.len(), "Bing response received");

        parse_bing_html(&html)
    }

    fn backend_type(&self) -> Backend {
        Backend::Bing
    }
}

/// Parse Bing HTML into result URLs, in page order.
///
/// Extracted as a separate function for testability with mock HTML.
pub(crate) fn parse_bing_html(html: &str) -> Result<Vec<String>, SearchError> {
    let document = Html::parse_document(html);

    // Bing uses li.b_algo containers for organic search results
    let result_sel = Selector::parse("li.b_algo")
        .map_err(|e| SearchError::Parse(format!("invalid result selector: {e:?}")))?;
    let link_sel = Selector::parse("h2 a")
        .map_err(|e| SearchError::Parse(format!("invalid link selector: {e:?}")))?;

    let mut urls = Vec::new();

    for element in document.select(&result_sel) {
        let href = element
            .select(&link_sel)
            .next()
            .and_then(|a| a.value().attr("href"));

        match href {
            Some(h) if !h.is_empty() => urls.push(h.to_string()),
            _ => continue,
        }
    }

    tracing::debug!(count = urls.len(), "Bing results parsed");
    Ok(urls)
}
