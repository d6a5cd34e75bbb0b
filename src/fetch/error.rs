// src/fetch/error.rs
// =============================================================================
// Why a page could not be fetched.
//
// Only three kinds are "recoverable": the crawler skips the URL and carries
// on. Everything else is reported as-is and ends the crawl.
// =============================================================================

use thiserror::Error;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[derive(Error, Debug)]
pub enum FetchError {
    /// The link is a relative reference with no scheme (`page2`, `#top`, `//host/x`)
    #[error("no scheme supplied in '{url}'")]
    MissingScheme { url: String },

    /// An absolute URL the HTTP client cannot talk to (`mailto:`, `ftp:` ...)
    #[error("unsupported scheme '{scheme}' in '{url}'")]
    InvalidScheme { url: String, scheme: String },

    /// Connecting failed or the request timed out
    #[error("connection to '{url}' failed: {source}")]
    ConnectionFailure {
        url: String,
        #[source]
        source: BoxError,
    },

    /// Absolute URL that is syntactically broken (empty host, bad port ...)
    #[error("invalid url '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    /// Any other transport failure: redirect loops, unreadable bodies
    #[error("request to '{url}' failed: {source}")]
    Request {
        url: String,
        #[source]
        source: BoxError,
    },
}

impl FetchError {
    /// True for the failures a crawl absorbs by skipping the URL
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            FetchError::MissingScheme { .. }
                | FetchError::InvalidScheme { .. }
                | FetchError::ConnectionFailure { .. }
        )
    }

    // Short machine-friendly label, used in the JSON report
    pub fn kind(&self) -> &'static str {
        match self {
            FetchError::MissingScheme { .. } => "missing_scheme",
            FetchError::InvalidScheme { .. } => "invalid_scheme",
            FetchError::ConnectionFailure { .. } => "connection_failure",
            FetchError::InvalidUrl { .. } => "invalid_url",
            FetchError::Request { .. } => "request",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scheme_errors_are_recoverable() {
        let missing = FetchError::MissingScheme { url: "page2".to_string() };
        let invalid = FetchError::InvalidScheme {
            url: "mailto:a@b.com".to_string(),
            scheme: "mailto".to_string(),
        };
        assert!(missing.is_recoverable());
        assert!(invalid.is_recoverable());
        assert_eq!(invalid.kind(), "invalid_scheme");
    }

    #[test]
    fn test_connection_failure_keeps_source() {
        let err = FetchError::ConnectionFailure {
            url: "https://down.test/".to_string(),
            source: "connection refused".into(),
        };
        assert!(err.is_recoverable());
        assert_eq!(
            err.to_string(),
            "connection to 'https://down.test/' failed: connection refused"
        );
    }

    #[test]
    fn test_invalid_url_is_fatal() {
        let err = FetchError::InvalidUrl {
            url: "http://".to_string(),
            reason: "empty host".to_string(),
        };
        assert!(!err.is_recoverable());
        assert_eq!(err.to_string(), "invalid url 'http://': empty host");
    }
}
