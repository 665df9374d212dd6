//! Static blacklist filter for backend result URLs.
//!
//! Backends return URLs that the caller intends to crawl. Some of them
//! are never worth fetching (binary spreadsheets, plain-text dumps,
//! video sites), so they are dropped here before the result cap is
//! applied.

/// Substrings that disqualify a URL from the result set.
///
/// Matching is deliberately coarse: a case-sensitive substring match
/// anywhere in the URL text, with no URL-structure parsing. A page whose
/// path merely contains "youtu.be" is dropped even when the host is
/// unrelated.
const BLACKLIST: &[&str] = &[".xls", ".txt", "youtube.com", "youtu.be"];

/// Remove blacklisted URLs, preserving the relative order of survivors.
///
/// A URL survives iff it contains none of the [`BLACKLIST`] substrings.
/// Safe on empty input and idempotent: filtering an already-filtered
/// sequence is a no-op.
pub fn filter_urls(urls: Vec<String>) -> Vec<String> {
    let before = urls.len();
    let kept: Vec<String> = urls
        .into_iter()
        .filter(|url| !BLACKLIST.iter().any(|bad| url.contains(bad)))
        .collect();

    if kept.len() < before {
        tracing::debug!(
            removed = before - kept.len(),
            kept = kept.len(),
            "blacklisted URLs dropped"
        );
    }
    kept
}
