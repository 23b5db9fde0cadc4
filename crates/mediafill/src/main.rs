//! Mediafill CLI binary.
//!
//! Runs one backfill pass and exits non-zero if the run was aborted.

use clap::Parser;
use mediafill::cli::{Cli, run};
use mediafill::observability::init_observability;
use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    // Load .env before reading DATABASE_URL
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    if let Err(e) = init_observability(&cli.observability()) {
        eprintln!("Failed to initialize logging: {}", e);
        return ExitCode::FAILURE;
    }

    match run(&cli).await {
        Ok(summary) => {
            println!("{}", summary);
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!(error = %e, systemic = e.is_systemic(), "Backfill aborted");
            ExitCode::FAILURE
        }
    }
}
