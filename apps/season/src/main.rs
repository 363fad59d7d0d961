//! # Season
//!
//! Prints the name of a season enumeration value.
//!
//! ## Usage
//!
//! ```bash
//! # Name of the default constant (spring)
//! season
//!
//! # Same constant under the partial mapping (unknown)
//! season --mapping partial
//!
//! # Other operations
//! season name 2
//! season list --json-mode
//! season parse Autumn
//! ```

use clap::Parser;
use season::cli;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

// =============================================================================
// APPLICATION ENTRY POINT
// =============================================================================

fn main() {
    let cli = cli::Cli::parse();

    // Logs go to stderr; stdout carries command output only.
    // SEASON_LOG_FORMAT=json enables machine-parseable output.
    let log_format = std::env::var("SEASON_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

    let default_filter = if cli.verbose {
        "season=debug"
    } else {
        "season=warn"
    };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| default_filter.into());

    match log_format.as_str() {
        "json" => {
            tracing_subscriber::registry()
                .with(filter)
                .with(
                    tracing_subscriber::fmt::layer()
                        .json()
                        .with_writer(std::io::stderr),
                )
                .init();
        }
        _ => {
            tracing_subscriber::registry()
                .with(filter)
                .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
                .init();
        }
    }

    if let Err(e) = cli::execute(cli) {
        tracing::error!("Error: {}", e);
        std::process::exit(1);
    }
}
