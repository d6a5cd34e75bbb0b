// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// The starting URL is checked right here, while arguments are parsed, so a
// bad URL is rejected as a usage error before any network activity.
// =============================================================================

use crate::config::{self, CrawlConfig, DEFAULT_TIMEOUT_SECS, MAX_DEPTH};
use clap::Parser;
use std::time::Duration;

#[derive(Parser, Debug)]
#[command(
    name = "email-crawler",
    version,
    about = "Crawl a website and collect the email addresses it mentions",
    long_about = "email-crawler fetches a starting page, follows its links breadth-first up to \
                  the given depth, and prints every email-like string found along the way."
)]
pub struct Cli {
    /// Starting URL (absolute http or https URL)
    #[arg(value_parser = parse_url_arg)]
    pub url: String,

    /// How many link hops to follow after the starting page
    ///
    /// 0 = only the starting page, 1 = plus every page it links to, etc.
    #[arg(short, long, default_value_t = 0, value_parser = clap::value_parser!(u8).range(0..=MAX_DEPTH as i64))]
    pub depth: u8,

    /// Output results in JSON format instead of plain text
    #[arg(long)]
    pub json: bool,

    /// Per-request timeout in seconds
    #[arg(long, value_name = "SECS", default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout: u64,

    /// Number of pages fetched at the same time within one depth level
    #[arg(short, long, default_value_t = 1, value_parser = clap::value_parser!(u16).range(1..))]
    pub concurrency: u16,

    /// User-Agent header sent with every request
    #[arg(long, default_value = config::DEFAULT_USER_AGENT)]
    pub user_agent: String,

    /// Log debug details (queued links, HTTP statuses) to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    pub fn crawl_config(&self) -> CrawlConfig {
        CrawlConfig::default()
            .with_max_depth(self.depth)
            .with_timeout(Duration::from_secs(self.timeout))
            .with_concurrency(usize::from(self.concurrency))
            .with_user_agent(self.user_agent.as_str())
    }
}

fn parse_url_arg(value: &str) -> Result<String, String> {
    config::parse_start_url(value).map_err(|e| e.to_string())
}
