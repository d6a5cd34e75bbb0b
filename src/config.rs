// src/config.rs
// =============================================================================
// Settings for one crawl, plus the start-URL check shared by the CLI and
// the engine.
//
// Nothing is read from files or the environment here; main.rs builds a
// CrawlConfig from the parsed command line.
// =============================================================================

use crate::crawl::CrawlError;
use std::time::Duration;
use url::Url;

/// Deepest crawl accepted: the start page plus four hops
pub const MAX_DEPTH: u8 = 4;

pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

pub const DEFAULT_USER_AGENT: &str = concat!("email-crawler/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Clone)]
pub struct CrawlConfig {
    /// Number of hop levels followed after the start page
    pub max_depth: u8,
    /// Per-request timeout handed to the HTTP client
    pub timeout: Duration,
    /// Fetches in flight within one depth level (1 = strictly sequential)
    pub concurrency: usize,
    pub user_agent: String,
}

impl Default for CrawlConfig {
    fn default() -> Self {
        Self {
            max_depth: 0,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            concurrency: 1,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl CrawlConfig {
    pub fn with_max_depth(mut self, depth: u8) -> Self {
        self.max_depth = depth;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_concurrency(mut self, concurrency: usize) -> Self {
        self.concurrency = concurrency;
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    pub fn validate(&self) -> Result<(), CrawlError> {
        if self.max_depth > MAX_DEPTH {
            return Err(CrawlError::DepthOutOfRange(self.max_depth));
        }
        if self.concurrency == 0 {
            return Err(CrawlError::InvalidConcurrency);
        }
        Ok(())
    }
}

// Accepts only absolute http(s) URLs with a host
//
// The URL is returned exactly as given: the crawl compares URLs as plain
// strings, so normalizing here would change which links count as seen.
pub fn parse_start_url(input: &str) -> Result<String, CrawlError> {
    let invalid = |reason: &str| CrawlError::InvalidStartUrl {
        url: input.to_string(),
        reason: reason.to_string(),
    };

    let parsed = Url::parse(input).map_err(|e| invalid(&e.to_string()))?;

    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(invalid("only http and https are supported"));
    }
    if parsed.host_str().map_or(true, str::is_empty) {
        return Err(invalid("missing host"));
    }

    Ok(input.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = CrawlConfig::default();
        assert_eq!(config.max_depth, 0);
        assert_eq!(config.concurrency, 1);
        assert_eq!(config.timeout, Duration::from_secs(10));
        assert!(config.user_agent.starts_with("email-crawler/"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_depth_above_four_rejected() {
        let config = CrawlConfig::default().with_max_depth(5);
        assert!(matches!(
            config.validate(),
            Err(CrawlError::DepthOutOfRange(5))
        ));
        assert!(CrawlConfig::default().with_max_depth(4).validate().is_ok());
    }

    #[test]
    fn test_zero_concurrency_rejected() {
        let config = CrawlConfig::default().with_concurrency(0);
        assert!(matches!(
            config.validate(),
            Err(CrawlError::InvalidConcurrency)
        ));
    }

    #[test]
    fn test_start_url_kept_verbatim() {
        assert_eq!(
            parse_start_url("https://a.test").unwrap(),
            "https://a.test"
        );
    }

    #[test]
    fn test_start_url_rejections() {
        for bad in ["a.test", "/page", "ftp://a.test/", "mailto:x@y.com", "http://", "not a url"] {
            assert!(
                matches!(parse_start_url(bad), Err(CrawlError::InvalidStartUrl { .. })),
                "{:?} should be rejected",
                bad
            );
        }
    }
}
