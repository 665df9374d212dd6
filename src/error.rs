//! Error types for the linkscout crate.
//!
//! All errors use stable string messages suitable for display to users
//! and programmatic handling. No API keys or sensitive data appear in
//! error messages.

/// Errors that can occur during backend search operations.
#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    /// The requested backend name is not in the supported set.
    #[error("unknown search backend: {0}")]
    UnknownBackend(String),

    /// An HTTP request to a search backend failed.
    #[error("HTTP error: {0}")]
    Http(String),

    /// Failed to parse a backend response (HTML page or JSON body).
    #[error("parse error: {0}")]
    Parse(String),

    /// Invalid search configuration.
    #[error("config error: {0}")]
    Config(String),
}

/// Convenience type alias for linkscout results.
pub type Result<T> = std::result::Result<T, SearchError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_unknown_backend() {
        let err = SearchError::UnknownBackend("askjeeves".into());
        assert_eq!(err.to_string(), "unknown search backend: askjeeves");
    }

    #[test]
    fn display_http() {
        let err = SearchError::Http("connection refused".into());
        assert_eq!(err.to_string(), "HTTP error: connection refused");
    }

    #[test]
    fn display_parse() {
        let err = SearchError::Parse("unexpected JSON structure".into());
        assert_eq!(err.to_string(), "parse error: unexpected JSON structure");
    }

    #[test]
    fn display_config() {
        let err = SearchError::Config("timeout_seconds must be > 0".into());
        assert_eq!(err.to_string(), "config error: timeout_seconds must be > 0");
    }

    #[test]
    fn error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<SearchError>();
    }
}
