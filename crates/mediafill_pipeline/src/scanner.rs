//! Candidate discovery.

use mediafill_core::{MediaId, MimeType};
use mediafill_error::MediafillResult;
use mediafill_interface::CatalogRepository;
use std::sync::Arc;
use tracing::{info, instrument};

/// Lists identifiers of records whose mime type is supported.
///
/// Only identifiers are loaded here; full records are hydrated chunk by chunk
/// later, so memory stays bounded on catalogs with millions of entries.
#[derive(Clone)]
pub struct CandidateScanner {
    catalog: Arc<dyn CatalogRepository>,
}

impl CandidateScanner {
    /// Create a scanner over the given catalog.
    pub fn new(catalog: Arc<dyn CatalogRepository>) -> Self {
        Self { catalog }
    }

    /// Return candidate identifiers in catalog order.
    ///
    /// A `limit` of `None` or `Some(0)` means unlimited; otherwise at most
    /// `limit` identifiers are returned.
    ///
    /// # Errors
    ///
    /// Catalog failures are returned unchanged; they abort the run.
    #[instrument(skip(self))]
    pub async fn scan(&self, limit: Option<u64>) -> MediafillResult<Vec<MediaId>> {
        let limit = limit.filter(|l| *l > 0);
        let mime_types = MimeType::candidates();

        let mut ids = self.catalog.list_candidate_ids(&mime_types, limit).await?;
        if let Some(limit) = limit {
            ids.truncate(usize::try_from(limit).unwrap_or(usize::MAX));
        }

        info!(count = ids.len(), "Found candidate records");
        Ok(ids)
    }
}
