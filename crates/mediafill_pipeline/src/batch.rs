//! Chunked hydration and fill orchestration.

use crate::{FillOutcome, ItemFiller};
use futures::stream::{self, TryStreamExt};
use mediafill_core::{MediaId, MediaRecord, RunStats, RunSummary};
use mediafill_error::MediafillResult;
use mediafill_interface::{CatalogRepository, ProgressReporter};
use std::sync::Arc;
use tracing::{debug, error, instrument};

/// Identifiers hydrated per catalog round-trip.
pub const DEFAULT_CHUNK_SIZE: usize = 100;

/// Drives the fill over every candidate, one chunk at a time.
///
/// Each chunk is hydrated with a single catalog call, its records are filled
/// (up to `concurrency` at once), and progress is reported only after the whole
/// chunk has finished.
pub struct BatchProcessor {
    catalog: Arc<dyn CatalogRepository>,
    filler: ItemFiller,
    reporter: Arc<dyn ProgressReporter>,
    chunk_size: usize,
    concurrency: usize,
}

impl BatchProcessor {
    /// Create a processor. Zero chunk size or concurrency is raised to one.
    pub fn new(
        catalog: Arc<dyn CatalogRepository>,
        filler: ItemFiller,
        reporter: Arc<dyn ProgressReporter>,
        chunk_size: usize,
        concurrency: usize,
    ) -> Self {
        Self {
            catalog,
            filler,
            reporter,
            chunk_size: chunk_size.max(1),
            concurrency: concurrency.max(1),
        }
    }

    /// Process every identifier and return the final counters.
    ///
    /// # Errors
    ///
    /// A failed hydration, or a per-item error classified as systemic, stops
    /// the run; the remaining items of that chunk and all later chunks are not
    /// processed.
    #[instrument(skip(self, ids), fields(candidates = ids.len(), chunk_size = self.chunk_size))]
    pub async fn run(&self, ids: &[MediaId]) -> MediafillResult<RunSummary> {
        let stats = RunStats::new();

        for (index, chunk) in ids.chunks(self.chunk_size).enumerate() {
            if let Err(e) = self.process_chunk(chunk, &stats).await {
                error!(chunk = index, summary = %stats.summary(), error = %e, "Aborting run");
                return Err(e);
            }
        }

        let summary = stats.summary();
        self.reporter.report_summary(&summary);
        Ok(summary)
    }

    async fn process_chunk(&self, chunk: &[MediaId], stats: &RunStats) -> MediafillResult<()> {
        let records = self.catalog.fetch_by_ids(chunk).await?;
        if records.len() < chunk.len() {
            debug!(
                requested = chunk.len(),
                hydrated = records.len(),
                "Some candidates disappeared before hydration"
            );
        }

        stream::iter(records.iter().map(Ok))
            .try_for_each_concurrent(self.concurrency, move |record| self.process_record(record, stats))
            .await?;

        self.reporter.report_progress(records.len() as u64);
        Ok(())
    }

    async fn process_record(&self, record: &MediaRecord, stats: &RunStats) -> MediafillResult<()> {
        stats.add_total();
        match self.filler.fill(record).await {
            FillOutcome::Filled { .. } => stats.add_updated(),
            FillOutcome::AlreadyPresent => stats.add_present(),
            FillOutcome::DryRun | FillOutcome::MissingDimensions | FillOutcome::FetchFailed => {
                stats.add_skipped()
            }
            FillOutcome::Failed(e) => {
                stats.add_failed();
                if e.is_systemic() {
                    return Err(e);
                }
            }
        }
        Ok(())
    }
}
