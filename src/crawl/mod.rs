// src/crawl/mod.rs
// =============================================================================
// This module handles crawling a website for email addresses.
//
// Features:
// - Breadth-first crawling, one depth level at a time
// - Configurable depth limit (0 = only the starting page)
// - Every URL is fetched at most once per crawl
// - A bad link is skipped, never fatal to the crawl as a whole
// - Optional bounded concurrency within a level, and cancellation
// =============================================================================

mod engine;
mod error;
mod queue;
mod report;

pub use engine::CrawlEngine;
pub use error::CrawlError;
pub use report::CrawlReport;
