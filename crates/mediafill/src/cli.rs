//! CLI definition and run wiring.

use crate::observability::ObservabilityConfig;
use clap::Parser;
use mediafill_core::RunSummary;
use mediafill_database::{PostgresCatalogRepository, create_pool, database_url};
use mediafill_error::MediafillResult;
use mediafill_fetch::PlaceholderClient;
use mediafill_pipeline::{Backfill, BackfillOptions, MediafillConfig, TracingReporter};
use mediafill_storage::FileSystemStorage;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

/// Mediafill - fill missing catalog images with dimension-matched placeholders
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "mediafill")]
#[command(about = "Fill missing catalog images with dimension-matched placeholders", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Process at most this many candidates (0 means all)
    #[arg(long)]
    pub limit: Option<u64>,

    /// Report missing files without fetching or writing anything
    #[arg(long)]
    pub dry_run: bool,

    /// Identifiers hydrated per catalog round-trip
    #[arg(long)]
    pub chunk_size: Option<usize>,

    /// Fills in flight within one chunk
    #[arg(long)]
    pub concurrency: Option<usize>,

    /// Configuration file layered over the defaults
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Emit JSON log lines
    #[arg(long)]
    pub json_logs: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Logging options requested on the command line.
    pub fn observability(&self) -> ObservabilityConfig {
        ObservabilityConfig::new(self.verbose, self.json_logs)
    }

    /// Load configuration and apply command-line overrides.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if loading fails or an override is zero.
    pub fn load_config(&self) -> MediafillResult<MediafillConfig> {
        let mut config = MediafillConfig::load(self.config.as_deref())?;
        self.apply_overrides(&mut config)?;
        Ok(config)
    }

    /// Apply `--chunk-size` and `--concurrency` to a loaded configuration.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the result fails validation.
    pub fn apply_overrides(&self, config: &mut MediafillConfig) -> MediafillResult<()> {
        if let Some(chunk_size) = self.chunk_size {
            config.batch.chunk_size = chunk_size;
        }
        if let Some(concurrency) = self.concurrency {
            config.batch.concurrency = concurrency;
        }
        config.validate()
    }
}

/// Run one backfill against PostgreSQL, the filesystem and the placeholder service.
///
/// # Errors
///
/// Returns configuration, connection and other systemic failures. Per-item
/// problems are only counted in the returned summary.
pub async fn run(cli: &Cli) -> MediafillResult<RunSummary> {
    let config = cli.load_config()?;
    info!(
        storage = %config.storage.path.display(),
        base_url = %config.placeholder.base_url,
        chunk_size = config.batch.chunk_size,
        concurrency = config.batch.concurrency,
        dry_run = cli.dry_run,
        "Starting backfill"
    );

    let pool = create_pool(&database_url()?)?;
    let catalog = PostgresCatalogRepository::new(pool);
    let storage = FileSystemStorage::new(&config.storage.path)?;
    let fetcher = PlaceholderClient::new(
        Duration::from_secs(config.placeholder.timeout_secs),
        &config.placeholder.user_agent,
    )?;

    let backfill = Backfill::new(
        Arc::new(catalog),
        Arc::new(storage),
        Arc::new(fetcher),
        Arc::new(TracingReporter::new()),
        BackfillOptions::from_config(&config, cli.dry_run),
    );

    backfill.run(cli.limit).await
}
