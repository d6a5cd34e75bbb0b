// src/output.rs
// =============================================================================
// Turns a crawl report into what the user sees on stdout.
//
// Plain text mirrors a simple listing:
//
//   Found emails:
//
//   a@example.com
//   b@example.com
//
// or "Emails not found" when the set is empty. JSON prints the whole
// report. Progress and warnings never go here; they are logged to stderr.
// =============================================================================

use crate::crawl::CrawlReport;
use anyhow::Result;

pub fn render(report: &CrawlReport, json: bool) -> Result<String> {
    if json {
        Ok(serde_json::to_string_pretty(report)?)
    } else {
        Ok(render_text(report))
    }
}

fn render_text(report: &CrawlReport) -> String {
    let mut out = String::new();

    if report.emails.is_empty() {
        out.push_str("\nEmails not found");
        return out;
    }

    out.push_str("\nFound emails:\n");
    for email in &report.emails {
        out.push('\n');
        out.push_str(email);
    }
    out
}
