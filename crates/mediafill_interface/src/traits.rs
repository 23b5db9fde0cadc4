//! Collaborator traits.

use crate::StoredMedia;
use async_trait::async_trait;
use mediafill_core::{ExecutionContext, MediaId, MediaRecord, RunSummary};
use mediafill_error::MediafillResult;

/// Read access to the media catalog.
///
/// Errors from either method mean the catalog itself is unusable and abort
/// the run.
#[async_trait]
pub trait CatalogRepository: Send + Sync {
    /// List identifiers of records whose mime type is in `mime_types`.
    ///
    /// Only identifiers are materialized, never full records. Results come back
    /// in the catalog's natural storage order, truncated to `limit` when given.
    async fn list_candidate_ids(
        &self,
        mime_types: &[&str],
        limit: Option<u64>,
    ) -> MediafillResult<Vec<MediaId>>;

    /// Hydrate full records for a set of identifiers.
    ///
    /// The returned order is unspecified, and identifiers that no longer exist
    /// are silently absent.
    async fn fetch_by_ids(&self, ids: &[MediaId]) -> MediafillResult<Vec<MediaRecord>>;
}

/// Read/write access to the binary bytes behind catalog records.
#[async_trait]
pub trait MediaStorage: Send + Sync {
    /// Load the bytes stored for a record.
    ///
    /// Returns `None` when nothing (or only an empty file) is stored.
    async fn load_bytes(&self, id: &MediaId) -> MediafillResult<Option<Vec<u8>>>;

    /// Persist bytes for a record under `file_name`.
    ///
    /// Backends never overwrite bytes that are already present.
    async fn save_bytes(
        &self,
        data: &[u8],
        file_name: &str,
        id: &MediaId,
        context: &ExecutionContext,
    ) -> MediafillResult<StoredMedia>;

    /// Check that `file_name` could be persisted, without touching storage.
    ///
    /// Called before any bytes are fetched. Backends with no naming rules
    /// accept everything.
    fn validate_file_name(&self, _file_name: &str) -> MediafillResult<()> {
        Ok(())
    }

    /// Backend name for logging.
    fn backend_name(&self) -> &'static str;
}

/// HTTP access to the placeholder image service.
#[async_trait]
pub trait ImageFetcher: Send + Sync {
    /// GET `url` and return the response body.
    ///
    /// `Ok(None)` covers non-success statuses and empty bodies. Transport
    /// failures are returned as errors.
    async fn fetch_bytes(&self, url: &str, suggested_name: &str) -> MediafillResult<Option<Vec<u8>>>;
}

/// Sink for run progress, advisories and the final summary.
pub trait ProgressReporter: Send + Sync {
    /// `increment` more records have been processed.
    fn report_progress(&self, increment: u64);

    /// A record was skipped or failed; `message` names it.
    fn report_advisory(&self, message: &str);

    /// The run finished.
    fn report_summary(&self, summary: &RunSummary);
}
