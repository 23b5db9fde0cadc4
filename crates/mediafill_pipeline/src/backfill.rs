//! One complete backfill run.

use crate::{BatchProcessor, CandidateScanner, DEFAULT_CHUNK_SIZE, ItemFiller, MediafillConfig};
use mediafill_core::{ExecutionContext, RunSummary};
use mediafill_error::MediafillResult;
use mediafill_interface::{CatalogRepository, ImageFetcher, MediaStorage, ProgressReporter};
use std::sync::Arc;
use tracing::{info, instrument};

/// Settings for a single run.
///
/// # Example
///
/// ```
/// use mediafill_pipeline::BackfillOptionsBuilder;
///
/// let options = BackfillOptionsBuilder::default()
///     .dry_run(true)
///     .chunk_size(50usize)
///     .build()
///     .unwrap();
/// assert_eq!(*options.chunk_size(), 50);
/// assert_eq!(*options.concurrency(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, derive_builder::Builder, derive_getters::Getters)]
#[builder(setter(into), build_fn(private, name = "build_internal"))]
pub struct BackfillOptions {
    /// Report missing files without fetching or persisting
    #[builder(default)]
    dry_run: bool,

    /// Identifiers hydrated per catalog round-trip
    #[builder(default = "DEFAULT_CHUNK_SIZE")]
    chunk_size: usize,

    /// Fills in flight within one chunk
    #[builder(default = "1")]
    concurrency: usize,

    /// Placeholder service base URL
    #[builder(default = "String::from(\"https://placehold.co\")")]
    base_url: String,

    /// Context passed to every save
    #[builder(default = "ExecutionContext::backfill()")]
    context: ExecutionContext,
}

impl BackfillOptionsBuilder {
    /// Build the options, rejecting a zero chunk size or concurrency.
    pub fn build(&self) -> Result<BackfillOptions, String> {
        let options = self.build_internal().map_err(|e| e.to_string())?;
        if options.chunk_size == 0 {
            return Err("chunk_size must be greater than zero".to_string());
        }
        if options.concurrency == 0 {
            return Err("concurrency must be greater than zero".to_string());
        }
        Ok(options)
    }
}

impl BackfillOptions {
    /// Options taken from a loaded configuration.
    pub fn from_config(config: &MediafillConfig, dry_run: bool) -> Self {
        Self {
            dry_run,
            chunk_size: config.batch.chunk_size.max(1),
            concurrency: config.batch.concurrency.max(1),
            base_url: config.placeholder.base_url.clone(),
            context: config.execution_context(),
        }
    }
}

/// Scan, batch, verify and fill in one call.
pub struct Backfill {
    scanner: CandidateScanner,
    processor: BatchProcessor,
    dry_run: bool,
}

impl Backfill {
    /// Wire the collaborators together.
    pub fn new(
        catalog: Arc<dyn CatalogRepository>,
        storage: Arc<dyn MediaStorage>,
        fetcher: Arc<dyn ImageFetcher>,
        reporter: Arc<dyn ProgressReporter>,
        options: BackfillOptions,
    ) -> Self {
        let filler = ItemFiller::new(
            storage,
            fetcher,
            Arc::clone(&reporter),
            options.base_url.clone(),
            options.dry_run,
            options.context,
        );
        let processor = BatchProcessor::new(
            Arc::clone(&catalog),
            filler,
            reporter,
            options.chunk_size,
            options.concurrency,
        );

        Self {
            scanner: CandidateScanner::new(catalog),
            processor,
            dry_run: options.dry_run,
        }
    }

    /// Run the backfill over at most `limit` candidates (`None` or `Some(0)` for all).
    ///
    /// # Errors
    ///
    /// Returns the first systemic error. Per-item problems are counted in the
    /// summary instead.
    #[instrument(skip(self), fields(dry_run = self.dry_run))]
    pub async fn run(&self, limit: Option<u64>) -> MediafillResult<RunSummary> {
        let ids = self.scanner.scan(limit).await?;
        let summary = self.processor.run(&ids).await?;
        info!(%summary, "Run finished");
        Ok(summary)
    }
}
