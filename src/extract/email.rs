// src/extract/email.rs
// =============================================================================
// Pulls email-like strings out of raw page text.
//
// This is pattern matching, not validation: anything shaped like
// local-part@domain.tld is accepted, where both sides use letters, digits
// and `. - + _`, and the final segment is 2-4 letters (any case).
// =============================================================================

use regex::Regex;
use std::collections::HashSet;
use std::sync::LazyLock;

// Compiled once on first use, shared by every crawl in the process
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)[a-z0-9.\-+_]+@[a-z0-9.\-+_]+\.[a-z]{2,4}")
        .expect("email pattern is a valid regex")
});

/// Returns every distinct email-like substring of `text`.
///
/// Matches are leftmost and non-overlapping. Case is preserved, so
/// `foo@bar.com` and `FOO@BAR.COM` are two different entries.
pub fn extract_emails(text: &str) -> HashSet<String> {
    EMAIL_PATTERN
        .find_iter(text)
        .map(|m| m.as_str().to_string())
        .collect()
}
