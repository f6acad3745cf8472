//! Error types for the podsift-search crate.
//!
//! Messages are stable and safe to show to users. API keys never appear
//! in error messages.

/// Errors that can occur while querying podcast directories.
#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    /// An HTTP request to a podcast directory failed or returned a non-success status.
    #[error("HTTP error: {0}")]
    Http(String),

    /// A provider call did not finish within its time budget.
    #[error("search timed out: {0}")]
    Timeout(String),

    /// Failed to decode a provider response body.
    #[error("parse error: {0}")]
    Parse(String),

    /// Invalid search or provider configuration.
    #[error("config error: {0}")]
    Config(String),

    /// A provenance tag that names neither known podcast directory.
    #[error("unknown podcast source: {0}")]
    UnknownSource(String),
}

/// Convenience type alias for podsift-search results.
pub type Result<T> = std::result::Result<T, SearchError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_http() {
        let err = SearchError::Http("status 503".into());
        assert_eq!(err.to_string(), "HTTP error: status 503");
    }

    #[test]
    fn display_timeout() {
        let err = SearchError::Timeout("Podscan exceeded 10s".into());
        assert_eq!(err.to_string(), "search timed out: Podscan exceeded 10s");
    }

    #[test]
    fn display_parse() {
        let err = SearchError::Parse("expected object".into());
        assert_eq!(err.to_string(), "parse error: expected object");
    }

    #[test]
    fn display_config() {
        let err = SearchError::Config("display_limit must be greater than 0".into());
        assert_eq!(
            err.to_string(),
            "config error: display_limit must be greater than 0"
        );
    }

    #[test]
    fn display_unknown_source() {
        let err = SearchError::UnknownSource("iTunes".into());
        assert_eq!(err.to_string(), "unknown podcast source: iTunes");
    }

    #[test]
    fn error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<SearchError>();
    }
}
