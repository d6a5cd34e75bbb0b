// src/crawl/report.rs
// =============================================================================
// What a finished crawl hands back.
//
// The emails are the main result; the rest tells the caller how the crawl
// went. #[derive(Serialize)] lets main.rs print the whole thing as JSON.
// =============================================================================

use serde::Serialize;
use std::collections::BTreeSet;

/// A URL the crawl gave up on without stopping
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedUrl {
    pub url: String,
    /// Error kind, e.g. "missing_scheme" or "connection_failure"
    pub kind: String,
    pub reason: String,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct CrawlReport {
    /// Every distinct email-like string found, sorted
    pub emails: BTreeSet<String>,
    /// Pages fetched successfully, in crawl order
    pub fetched: Vec<String>,
    /// URLs dequeued but skipped because their fetch failed recoverably
    pub skipped: Vec<SkippedUrl>,
    /// Number of depth levels drained
    pub levels: usize,
    /// True when the crawl stopped early on request
    pub cancelled: bool,
}

impl CrawlReport {
    /// Every URL the crawl attempted, fetched or skipped
    pub fn attempted(&self) -> usize {
        self.fetched.len() + self.skipped.len()
    }
}
