//! Google backend — the default engine, best results but aggressive
//! bot detection.
//!
//! Google employs CAPTCHAs, cookie consent walls, and IP-based rate
//! limiting; the shared client's cookie jar and User-Agent rotation keep
//! the plain HTML results page reachable most of the time.

use crate::backend::SearchBackendTrait;
use crate::config::SearchConfig;
use crate::error::SearchError;
use crate::types::Backend;
use scraper::{Html, Selector};
use url::Url;

/// Google HTML search scraper.
///
/// The canonical default backend: highest result quality, but also the
/// most likely to block automated requests — callers can switch to Bing
/// or DuckDuckGo when that happens.
pub struct GoogleBackend;

impl GoogleBackend {
    /// Unwrap Google's `/url?q=...` redirect links to the real target.
    ///
    /// Anchors on the no-JavaScript results page point at
    /// `/url?q=https%3A%2F%2Fexample.com&sa=U&ved=...`; direct absolute
    /// links are passed through unchanged.
    fn extract_url(href: &str) -> Option<String> {
        if let Some(rest) = href.strip_prefix("/url?") {
            // Relative redirect — resolve against the google host to parse the query.
            let parsed = Url::parse(&format!("https://www.google.com/url?{rest}")).ok()?;
            return parsed
                .query_pairs()
                .find(|(key, _)| key == "q")
                .map(|(_, value)| value.into_owned());
        }
        if href.starts_with("http://") || href.starts_with("https://") {
            return Some(href.to_string());
        }
        None
    }
}

impl SearchBackendTrait for GoogleBackend {
    async fn fetch(
        &self,
        client: &reqwest::Client,
        query: &str,
        config: &SearchConfig,
    ) -> Result<Vec<String>, SearchError> {
        tracing::trace!(query, "Google search");

        let safe_val = if config.safe_search { "active" } else { "off" };

        let response = client
            .get("https://www.google.com/search")
            .query(&[("q", query), ("hl", "en"), ("safe", safe_val)])
            .header("Accept", "text/html,application/xhtml+xml")
            .header("Accept-Language", "en-US,en;q=0.9")
            .send()
            .await
            .map_err(|e| SearchError::Http(format!("Google request failed: {e}")))?
            .error_for_status()
            .map_err(|e| SearchError::Http(format!("Google HTTP error: {e}")))?;

        let html = response
            .text()
            .await
            .map_err(|e| SearchError::Http(format!("Google response read failed: {e}")))?;

        tracing::trace!(bytes = html.len(), "Google response received");

        parse_google_html(&html)
    }

    fn backend_type(&self) -> Backend {
        Backend::Google
    }
}

/// Parse Google HTML into result URLs, in page order.
///
/// Only anchors that contain an `h3` result heading are taken; that
/// excludes image packs, "people also ask" boxes, and footer links.
pub(crate) fn parse_google_html(html: &str) -> Result<Vec<String>, SearchError> {
    let document = Html::parse_document(html);

    let result_sel = Selector::parse("div.g")
        .map_err(|e| SearchError::Parse(format!("invalid result selector: {e:?}")))?;
    let link_sel = Selector::parse("a")
        .map_err(|e| SearchError::Parse(format!("invalid link selector: {e:?}")))?;
    let heading_sel = Selector::parse("h3")
        .map_err(|e| SearchError::Parse(format!("invalid heading selector: {e:?}")))?;

    let mut urls = Vec::new();

    for element in document.select(&result_sel) {
        let anchor = element
            .select(&link_sel)
            .find(|a| a.select(&heading_sel).next().is_some());

        let href = match anchor.and_then(|a| a.value().attr("href")) {
            Some(h) => h,
            None => continue,
        };

        if let Some(url) = GoogleBackend::extract_url(href) {
            urls.push(url);
        }
    }

    tracing::debug!(count = urls.len(), "Google results parsed");
    Ok(urls)
}
