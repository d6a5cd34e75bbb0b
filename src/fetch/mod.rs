// src/fetch/mod.rs
// =============================================================================
// Fetching pages.
//
// The crawler only knows about the PageFetcher trait, so tests can hand it
// an in-memory site instead of a network.
// =============================================================================

mod error;
mod http;

pub use error::FetchError;
pub use http::HttpFetcher;

use url::Url;

/// Something that turns a URL into page text
pub trait PageFetcher {
    async fn fetch(&self, url: &str) -> Result<String, FetchError>;
}

// Sorts a URL string into fetchable / missing scheme / bad scheme / broken
//
// Every fetcher runs this first so that all of them agree on which links
// are skipped and which ones end the crawl.
pub(crate) fn check_url(url: &str) -> Result<Url, FetchError> {
    match Url::parse(url) {
        Ok(parsed) if matches!(parsed.scheme(), "http" | "https") => Ok(parsed),
        Ok(parsed) => Err(FetchError::InvalidScheme {
            url: url.to_string(),
            scheme: parsed.scheme().to_string(),
        }),
        Err(url::ParseError::RelativeUrlWithoutBase) => Err(FetchError::MissingScheme {
            url: url.to_string(),
        }),
        Err(e) => Err(FetchError::InvalidUrl {
            url: url.to_string(),
            reason: e.to_string(),
        }),
    }
}
