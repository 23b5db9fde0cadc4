//! In-memory implementation of CatalogRepository for testing.
//!
//! Records are kept in insertion order, which stands in for the natural storage
//! order of a real table.

use async_trait::async_trait;
use mediafill_core::{MediaId, MediaRecord};
use mediafill_error::{DatabaseError, DatabaseErrorKind, MediafillResult};
use mediafill_interface::CatalogRepository;
use std::collections::HashSet;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use tokio::sync::RwLock;

/// In-memory catalog.
///
/// `fetch_by_ids` deliberately returns records in reverse catalog order so
/// callers cannot come to depend on hydration order.
///
/// # Example
/// ```
/// use mediafill_core::{MediaId, MediaRecordBuilder};
/// use mediafill_database::InMemoryCatalogRepository;
/// use mediafill_interface::CatalogRepository;
///
/// # #[tokio::main]
/// # async fn main() {
/// let catalog = InMemoryCatalogRepository::new();
/// let record = MediaRecordBuilder::default()
///     .id(MediaId::new_v4())
///     .file_name("hero")
///     .mime_type("image/png")
///     .build()
///     .unwrap();
/// catalog.insert(record).await;
///
/// let ids = catalog.list_candidate_ids(&["image/png"], None).await.unwrap();
/// assert_eq!(ids.len(), 1);
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct InMemoryCatalogRepository {
    records: Arc<RwLock<Vec<MediaRecord>>>,
    hydrate_calls: Arc<AtomicUsize>,
    fail_hydrate: Arc<AtomicBool>,
}

impl InMemoryCatalogRepository {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record.
    pub async fn insert(&self, record: MediaRecord) {
        self.records.write().await.push(record);
    }

    /// Remove a record, simulating a delete between scan and hydrate.
    pub async fn remove(&self, id: &MediaId) {
        self.records.write().await.retain(|r| r.id() != id);
    }

    /// Number of `fetch_by_ids` calls so far (for testing).
    pub fn hydrate_calls(&self) -> usize {
        self.hydrate_calls.load(Ordering::SeqCst)
    }

    /// Make subsequent hydrations fail as if the connection dropped (for testing).
    pub fn set_fail_hydrate(&self, fail: bool) {
        self.fail_hydrate.store(fail, Ordering::SeqCst);
    }
}

#[async_trait]
impl CatalogRepository for InMemoryCatalogRepository {
    async fn list_candidate_ids(
        &self,
        mime_types: &[&str],
        limit: Option<u64>,
    ) -> MediafillResult<Vec<MediaId>> {
        let limit = limit
            .map(|l| usize::try_from(l).unwrap_or(usize::MAX))
            .unwrap_or(usize::MAX);

        Ok(self
            .records
            .read()
            .await
            .iter()
            .filter(|r| mime_types.contains(&r.mime_type().as_str()))
            .map(|r| *r.id())
            .take(limit)
            .collect())
    }

    async fn fetch_by_ids(&self, ids: &[MediaId]) -> MediafillResult<Vec<MediaRecord>> {
        self.hydrate_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_hydrate.load(Ordering::SeqCst) {
            return Err(DatabaseError::new(DatabaseErrorKind::Connection(
                "connection reset by peer".to_string(),
            ))
            .into());
        }

        let wanted: HashSet<&MediaId> = ids.iter().collect();
        Ok(self
            .records
            .read()
            .await
            .iter()
            .rev()
            .filter(|r| wanted.contains(r.id()))
            .cloned()
            .collect())
    }
}
