//! In-memory media storage.
//!
//! Keeps bytes in a HashMap behind an RwLock. Useful for tests and dry
//! experiments; everything is lost when the storage is dropped.

use crate::compute_hash;
use async_trait::async_trait;
use mediafill_core::{ExecutionContext, MediaId};
use mediafill_error::{MediafillResult, StorageError, StorageErrorKind};
use mediafill_interface::{MediaStorage, StoredMedia};
use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::RwLock;

/// One recorded `save_bytes` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveCall {
    /// Record the bytes were saved for
    pub id: MediaId,
    /// File name passed by the caller
    pub file_name: String,
    /// The saved payload
    pub data: Vec<u8>,
    /// Context passed by the caller
    pub context: ExecutionContext,
}

/// In-memory storage backend.
///
/// # Example
/// ```
/// use mediafill_core::MediaId;
/// use mediafill_interface::MediaStorage;
/// use mediafill_storage::InMemoryStorage;
///
/// # #[tokio::main]
/// # async fn main() {
/// let storage = InMemoryStorage::new();
/// let id = MediaId::new_v4();
/// storage.insert(id, "existing.png", b"bytes".to_vec()).await;
/// assert!(storage.load_bytes(&id).await.unwrap().is_some());
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct InMemoryStorage {
    files: Arc<RwLock<HashMap<MediaId, (String, Vec<u8>)>>>,
    saves: Arc<RwLock<Vec<SaveCall>>>,
    fail_saves: Arc<AtomicBool>,
}

impl InMemoryStorage {
    /// Create an empty storage.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed bytes for a record without recording a save.
    pub async fn insert(&self, id: MediaId, file_name: impl Into<String>, data: Vec<u8>) {
        self.files
            .write()
            .await
            .insert(id, (file_name.into(), data));
    }

    /// Every `save_bytes` call that succeeded, in call order (for testing).
    pub async fn saves(&self) -> Vec<SaveCall> {
        self.saves.read().await.clone()
    }

    /// Make subsequent saves fail with a write error (for testing).
    pub fn set_fail_saves(&self, fail: bool) {
        self.fail_saves.store(fail, Ordering::SeqCst);
    }

    /// Number of records with stored bytes.
    pub async fn len(&self) -> usize {
        self.files.read().await.len()
    }

    /// Whether nothing is stored.
    pub async fn is_empty(&self) -> bool {
        self.files.read().await.is_empty()
    }
}

#[async_trait]
impl MediaStorage for InMemoryStorage {
    async fn load_bytes(&self, id: &MediaId) -> MediafillResult<Option<Vec<u8>>> {
        Ok(self
            .files
            .read()
            .await
            .get(id)
            .map(|(_, data)| data.clone())
            .filter(|data| !data.is_empty()))
    }

    async fn save_bytes(
        &self,
        data: &[u8],
        file_name: &str,
        id: &MediaId,
        context: &ExecutionContext,
    ) -> MediafillResult<StoredMedia> {
        if self.fail_saves.load(Ordering::SeqCst) {
            return Err(StorageError::new(StorageErrorKind::FileWrite(format!(
                "memory://{}/{}",
                id, file_name
            )))
            .into());
        }
        if data.is_empty() {
            return Err(StorageError::new(StorageErrorKind::EmptyPayload(id.to_string())).into());
        }

        let mut files = self.files.write().await;
        if files.get(id).is_some_and(|(_, existing)| !existing.is_empty()) {
            return Err(StorageError::new(StorageErrorKind::AlreadyExists(id.to_string())).into());
        }
        files.insert(*id, (file_name.to_string(), data.to_vec()));
        drop(files);

        self.saves.write().await.push(SaveCall {
            id: *id,
            file_name: file_name.to_string(),
            data: data.to_vec(),
            context: *context,
        });

        Ok(StoredMedia {
            id: *id,
            content_hash: compute_hash(data),
            storage_backend: self.backend_name().to_string(),
            storage_path: format!("memory://{}/{}", id, file_name),
            size_bytes: data.len() as u64,
        })
    }

    fn backend_name(&self) -> &'static str {
        "memory"
    }
}
