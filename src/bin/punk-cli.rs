//! Punk API CLI binary.
//!
//! A command-line interface for querying the Punk brewery catalog.

use std::process::ExitCode;

use clap::Parser;
use punkapi::cli::{handlers, Cli};
use punkapi::{output, PunkClient};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let client = match PunkClient::new(&cli.api_url) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {e}");
            eprintln!("Hint: --api-url must be an absolute URL like {}", punkapi::DEFAULT_API_URL);
            return ExitCode::FAILURE;
        }
    };

    let mut stdout = std::io::stdout().lock();
    let colored = output::stdout_supports_color();

    match handlers::execute(&client, &cli.command, &mut stdout, colored).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::debug!(error = ?e, "command failed");
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Logs go to stderr so they never mix with rendered output.
fn init_logging(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(if verbose { "debug" } else { "warn" }));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
