// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Parse command-line arguments using clap (a bad URL stops us here)
// 2. Set up logging to stderr
// 3. Crawl, letting Ctrl-C stop the crawl between fetches
// 4. Print the emails found
// 5. Exit with proper code (0 = crawl finished, 2 = error)
// =============================================================================

mod cli;
mod config;
mod crawl;
mod extract;
mod fetch;
mod output;

use anyhow::{Context, Result};
use clap::Parser;
use cli::Cli;
use crawl::CrawlEngine;
use fetch::HttpFetcher;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    // clap exits with code 2 on usage errors, before anything else runs
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let exit_code = match run(cli).await {
        Ok(()) => 0,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            2
        }
    };

    std::process::exit(exit_code);
}

async fn run(cli: Cli) -> Result<()> {
    let config = cli.crawl_config();
    let fetcher = HttpFetcher::new(&config).context("could not build HTTP client")?;

    let cancel = CancellationToken::new();
    spawn_ctrl_c_handler(cancel.clone());

    let engine = CrawlEngine::new(fetcher, config)?.with_cancellation(cancel);
    let report = engine.crawl(&cli.url).await?;

    info!(
        "Attempted {} URL(s) over {} level(s)",
        report.attempted(),
        report.levels
    );

    println!("{}", output::render(&report, cli.json)?);
    Ok(())
}

// RUST_LOG wins when set; otherwise info, or debug with --verbose
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("email_crawler={}", default_level)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn spawn_ctrl_c_handler(cancel: CancellationToken) {
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            warn!("Interrupted, finishing fetches in flight");
            cancel.cancel();
        }
    });
}
