//! Search backend implementations.
//!
//! Each module provides a struct implementing
//! [`crate::backend::SearchBackendTrait`]. The three web engines scrape
//! HTML results pages; NewsAPI is a keyed JSON API.

pub mod bing;
pub mod duckduckgo;
pub mod google;
pub mod newsapi;

pub use bing::BingBackend;
pub use duckduckgo::DuckDuckGoBackend;
pub use google::GoogleBackend;
pub use newsapi::NewsApiBackend;
