//! Per-record check-then-fill.

use mediafill_core::{
    ExecutionContext, MediaRecord, PlaceholderRequest, extract_dimensions, resolve_extension,
};
use mediafill_error::{FillErrorKind, MediafillError, MediafillResult};
use mediafill_interface::{ImageFetcher, MediaStorage, ProgressReporter, StoredMedia};
use std::sync::Arc;
use tracing::{debug, instrument};

/// How a single record was handled.
#[derive(Debug)]
pub enum FillOutcome {
    /// Bytes already existed; nothing done
    AlreadyPresent,
    /// Bytes were missing but the run is a dry run
    DryRun,
    /// Bytes were missing but metadata lacks usable width/height
    MissingDimensions,
    /// The placeholder service returned nothing usable
    FetchFailed,
    /// A placeholder was fetched and persisted
    Filled {
        /// Where the bytes went
        stored: StoredMedia,
        /// Size and format that were requested
        request: PlaceholderRequest,
    },
    /// An error while handling the record; see [`MediafillError::is_systemic`]
    Failed(MediafillError),
}

impl FillOutcome {
    /// Whether the record was filled.
    pub fn is_filled(&self) -> bool {
        matches!(self, FillOutcome::Filled { .. })
    }
}

/// Fills one record's missing bytes with a placeholder.
///
/// Steps: existence check, dry-run short-circuit, dimension extraction,
/// extension resolution, file name check, fetch, persist. The record's file
/// name is passed to the fetcher and to storage unchanged; the resolved
/// extension only selects the placeholder format. Every step that stops early emits an
/// advisory through the reporter. Errors never escape [`ItemFiller::fill`];
/// they come back as [`FillOutcome::Failed`].
#[derive(Clone)]
pub struct ItemFiller {
    storage: Arc<dyn MediaStorage>,
    fetcher: Arc<dyn ImageFetcher>,
    reporter: Arc<dyn ProgressReporter>,
    base_url: String,
    dry_run: bool,
    context: ExecutionContext,
}

impl ItemFiller {
    /// Create a filler.
    pub fn new(
        storage: Arc<dyn MediaStorage>,
        fetcher: Arc<dyn ImageFetcher>,
        reporter: Arc<dyn ProgressReporter>,
        base_url: impl Into<String>,
        dry_run: bool,
        context: ExecutionContext,
    ) -> Self {
        Self {
            storage,
            fetcher,
            reporter,
            base_url: base_url.into(),
            dry_run,
            context,
        }
    }

    /// Check and, if needed, fill one record.
    #[instrument(skip(self, record), fields(id = %record.id(), mime_type = %record.mime_type()))]
    pub async fn fill(&self, record: &MediaRecord) -> FillOutcome {
        match self.try_fill(record).await {
            Ok(outcome) => outcome,
            Err(e) => {
                self.advise(record, &e);
                FillOutcome::Failed(e)
            }
        }
    }

    fn advise(&self, record: &MediaRecord, reason: &dyn std::fmt::Display) {
        self.reporter.report_advisory(&format!(
            "media {} ({}): {}",
            record.id(),
            record.file_name(),
            reason
        ));
    }

    async fn try_fill(&self, record: &MediaRecord) -> MediafillResult<FillOutcome> {
        if self.storage.load_bytes(record.id()).await?.is_some() {
            debug!("File already present");
            return Ok(FillOutcome::AlreadyPresent);
        }

        if self.dry_run {
            self.advise(record, &"file missing, not filled (dry run)");
            return Ok(FillOutcome::DryRun);
        }

        let Some(dimensions) = extract_dimensions(record.metadata().as_ref()) else {
            let reason = FillErrorKind::IncompleteMetadata("no positive width/height".to_string());
            self.advise(record, &reason);
            return Ok(FillOutcome::MissingDimensions);
        };

        let extension = resolve_extension(record.mime_type(), record.file_extension().as_deref())?;
        let request = PlaceholderRequest {
            dimensions,
            extension,
        };
        let file_name = record.file_name().as_str();
        self.storage.validate_file_name(file_name)?;

        let url = request.url(&self.base_url);
        let bytes = match self.fetcher.fetch_bytes(&url, file_name).await {
            Ok(Some(bytes)) => bytes,
            Ok(None) => {
                let reason = FillErrorKind::FetchFailure(format!("empty response from {}", url));
                self.advise(record, &reason);
                return Ok(FillOutcome::FetchFailed);
            }
            Err(e) => {
                let reason = FillErrorKind::FetchFailure(e.to_string());
                self.advise(record, &reason);
                return Ok(FillOutcome::FetchFailed);
            }
        };

        let stored = self
            .storage
            .save_bytes(&bytes, file_name, record.id(), &self.context)
            .await?;

        debug!(
            path = %stored.storage_path,
            size = stored.size_bytes,
            extension = %request.extension,
            "Filled missing file"
        );
        Ok(FillOutcome::Filled { stored, request })
    }
}
