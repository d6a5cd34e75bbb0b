// src/crawl/queue.rs
// =============================================================================
// The traversal state of one crawl: which URLs wait at the current depth,
// which ones were found for the next depth, and everything seen so far.
//
// How it works:
// 1. The start URL is the whole first level
// 2. Each fetched page adds its emails to the result and its new links to
//    the next level
// 3. When a level is drained, the next level swaps in as one batch, as
//    long as depth remains
//
// One `seen` set holds every URL that was ever queued, at any level. A
// link is queued only if it was never seen, so no URL is fetched twice and
// the pending level never holds duplicates.
// =============================================================================

use super::report::{CrawlReport, SkippedUrl};
use crate::extract::{base_url, extract_anchor_hrefs, extract_emails, resolve_link};
use crate::fetch::FetchError;
use std::collections::{BTreeSet, HashSet, VecDeque};
use tracing::debug;

#[derive(Debug)]
pub(super) struct CrawlState {
    frontier: VecDeque<String>,
    next_frontier: Vec<String>,
    seen: HashSet<String>,
    emails: BTreeSet<String>,
    fetched: Vec<String>,
    skipped: Vec<SkippedUrl>,
    // Goes negative once the last allowed level is drained
    depth_left: i16,
    levels: usize,
}

impl CrawlState {
    pub(super) fn new(start_url: &str, max_depth: u8) -> Self {
        let mut seen = HashSet::new();
        seen.insert(start_url.to_string());

        Self {
            frontier: VecDeque::from([start_url.to_string()]),
            next_frontier: Vec::new(),
            seen,
            emails: BTreeSet::new(),
            fetched: Vec::new(),
            skipped: Vec::new(),
            depth_left: i16::from(max_depth),
            levels: 0,
        }
    }

    // Hands out the current level in FIFO order, leaving the frontier empty
    pub(super) fn take_level(&mut self) -> Vec<String> {
        self.levels += 1;
        self.frontier.drain(..).collect()
    }

    // Moves to the next depth level
    //
    // Returns false when depth is used up or nothing was found to crawl.
    pub(super) fn advance_level(&mut self) -> bool {
        self.depth_left -= 1;
        if self.depth_left < 0 {
            return false;
        }

        self.frontier = std::mem::take(&mut self.next_frontier).into();
        !self.frontier.is_empty()
    }

    pub(super) fn record_page(&mut self, url: &str, body: &str) {
        self.fetched.push(url.to_string());
        self.emails.extend(extract_emails(body));

        let base = base_url(url);
        for href in extract_anchor_hrefs(body) {
            let link = resolve_link(base.as_deref(), &href);
            self.queue_link(link);
        }
    }

    pub(super) fn record_skip(&mut self, url: &str, error: &FetchError) {
        self.skipped.push(SkippedUrl {
            url: url.to_string(),
            kind: error.kind().to_string(),
            reason: error.to_string(),
        });
    }

    // Queues a link for the next level unless it was seen before
    fn queue_link(&mut self, link: String) {
        if self.seen.insert(link.clone()) {
            debug!("Queued {}", link);
            self.next_frontier.push(link);
        }
    }

    pub(super) fn into_report(self, cancelled: bool) -> CrawlReport {
        CrawlReport {
            emails: self.emails,
            fetched: self.fetched,
            skipped: self.skipped,
            levels: self.levels,
            cancelled,
        }
    }
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. HashSet::insert returns a bool
//    - true if the value was new, false if it was already there
//    - queue_link uses that to check and mark a link in one step
//
// 2. What does std::mem::take do?
//    - Moves the value out and leaves Default::default() behind
//    - Here it empties next_frontier while handing its contents over
//
// 3. Why BTreeSet for emails?
//    - Same set semantics as HashSet, but iterates in sorted order, so
//      the printed list is stable from run to run
// -----------------------------------------------------------------------------
