//! # Headline Sentiment
//!
//! Downloads one news article, extracts its headline, and prints the
//! headline followed by its sentiment polarity in `[-1.0, 1.0]`.
//!
//! ## Usage
//!
//! ```sh
//! headline_sentiment
//! headline_sentiment --timeout-secs 10 --log-level debug
//! ```
//!
//! ## Architecture
//!
//! One linear run:
//! 1. **Fetching**: download the article page
//! 2. **Extracting**: parse the markup and pick the headline
//! 3. **Scoring**: compute the lexicon polarity of the headline
//! 4. **Output**: two lines on stdout; all logging goes to stderr

use clap::Parser;
use std::error::Error;
use tracing::{debug, error, info};
use tracing_subscriber::{EnvFilter, fmt as tfmt};

mod cli;
mod config;
mod error;
mod models;
mod pipeline;
mod scrapers;
mod sentiment;
mod utils;

use cli::Cli;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn Error>> {
    let args = Cli::parse();

    // --- Tracing init ---
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level));
    tfmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .init();

    info!(version = env!("CARGO_PKG_VERSION"), "headline_sentiment starting up");
    debug!(?args, "Parsed CLI arguments");

    let fetcher = pipeline::build_fetcher(&args).inspect_err(|e| error!(error = %e, "Setup failed"))?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    if let Err(e) = pipeline::run(&fetcher, pipeline::ARTICLE_URL, &mut out).await {
        error!(url = pipeline::ARTICLE_URL, error = %e, "Run failed");
        return Err(e.into());
    }

    Ok(())
}
