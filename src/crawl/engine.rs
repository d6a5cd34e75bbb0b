// src/crawl/engine.rs
// =============================================================================
// Drives a depth-limited, breadth-first crawl and gathers email addresses.
//
// Each depth level is drained completely before the next one starts. Within
// a level, up to `concurrency` fetches run at once through
// `buffered(n)`, which hands results back in frontier order. All state
// changes happen here, in the one task that owns the CrawlState, so the
// outcome is the same as a one-at-a-time crawl.
//
// Failure policy:
// - missing scheme, invalid scheme, connection failure: skip that URL
// - anything else: stop the crawl and return the error
// =============================================================================

use super::queue::CrawlState;
use super::{CrawlError, CrawlReport};
use crate::config::{parse_start_url, CrawlConfig};
use crate::fetch::PageFetcher;
use futures::future;
use futures::stream::{self, StreamExt};
use std::pin::pin;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

pub struct CrawlEngine<F> {
    fetcher: F,
    config: CrawlConfig,
    cancel: CancellationToken,
}

impl<F: PageFetcher> CrawlEngine<F> {
    pub fn new(fetcher: F, config: CrawlConfig) -> Result<Self, CrawlError> {
        config.validate()?;

        Ok(Self {
            fetcher,
            config,
            cancel: CancellationToken::new(),
        })
    }

    // Lets the caller stop the crawl between fetches
    //
    // Fetches already in flight still finish and count towards the result.
    pub fn with_cancellation(mut self, cancel: CancellationToken) -> Self {
        self.cancel = cancel;
        self
    }

    /// Crawls from `start_url` and returns everything found
    ///
    /// Every call starts from scratch: nothing carries over between crawls,
    /// so one engine can run several crawls, even at the same time.
    pub async fn crawl(&self, start_url: &str) -> Result<CrawlReport, CrawlError> {
        let start_url = parse_start_url(start_url)?;
        info!(
            "Starting crawl of {} (depth {}, {} in flight)",
            start_url, self.config.max_depth, self.config.concurrency
        );

        let mut state = CrawlState::new(&start_url, self.config.max_depth);

        loop {
            self.drain_level(&mut state).await?;

            if self.cancel.is_cancelled() {
                warn!("Crawl cancelled, returning partial results");
                return Ok(state.into_report(true));
            }
            if !state.advance_level() {
                break;
            }
        }

        let report = state.into_report(false);
        info!(
            "Crawl complete: {} page(s) fetched, {} skipped, {} email(s)",
            report.fetched.len(),
            report.skipped.len(),
            report.emails.len()
        );
        Ok(report)
    }

    async fn drain_level(&self, state: &mut CrawlState) -> Result<(), CrawlError> {
        let level = state.take_level();
        let fetcher = &self.fetcher;
        let cancel = &self.cancel;

        // take_while stops handing out URLs once cancelled; started fetches
        // still run to completion
        let fetches = stream::iter(level)
            .take_while(|_| future::ready(!cancel.is_cancelled()))
            .map(move |url| async move {
                info!("Crawling URL {}", url);
                let result = fetcher.fetch(&url).await;
                (url, result)
            })
            .buffered(self.config.concurrency);
        let mut fetches = pin!(fetches);

        while let Some((url, result)) = fetches.next().await {
            match result {
                Ok(body) => state.record_page(&url, &body),
                Err(e) if e.is_recoverable() => {
                    warn!("Skipping {}: {}", url, e);
                    state.record_skip(&url, &e);
                }
                Err(e) => return Err(CrawlError::Fetch(e)),
            }
        }

        Ok(())
    }
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. buffered vs buffer_unordered
//    - Both run up to N futures at once
//    - buffered(N) yields results in the order the inputs went in
//    - We need that order so the next level is queued exactly as a
//      one-at-a-time crawl would queue it
//
// 2. Why pin!?
//    - StreamExt::next() needs a stream that won't move in memory
//    - The async blocks inside our stream are not Unpin, so we pin the
//      stream on the stack first
//
// 3. Why is CrawlEngine generic over F?
//    - F is whatever fetches pages: HttpFetcher in main.rs, a fake site in
//      the tests below
//    - Generics are resolved at compile time, so the real crawl pays
//      nothing for the flexibility
// -----------------------------------------------------------------------------
