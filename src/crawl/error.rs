// src/crawl/error.rs

use crate::config::MAX_DEPTH;
use crate::fetch::FetchError;
use thiserror::Error;

/// Failures that stop a crawl, or keep it from starting
#[derive(Error, Debug)]
pub enum CrawlError {
    #[error("'{url}' is not a valid url: {reason}")]
    InvalidStartUrl { url: String, reason: String },

    #[error("depth {0} is out of range (0..={max})", max = MAX_DEPTH)]
    DepthOutOfRange(u8),

    #[error("concurrency must be at least 1")]
    InvalidConcurrency,

    /// A fetch failure outside the skippable kinds
    #[error(transparent)]
    Fetch(#[from] FetchError),
}
