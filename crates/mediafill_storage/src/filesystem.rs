//! Filesystem-based media storage implementation.
//!
//! This backend stores each record's bytes in a directory derived from the
//! record identifier, so the existence check needs nothing but the id.

use crate::compute_hash;
use mediafill_core::{ExecutionContext, MediaId};
use mediafill_error::{MediafillResult, StorageError, StorageErrorKind};
use mediafill_interface::{MediaStorage, StoredMedia};
use std::path::PathBuf;

const TEMP_SUFFIX: &str = ".tmp";

/// Filesystem storage backend.
///
/// Stores media files in a record-addressed structure:
/// `{base_path}/{id[0:2]}/{id}/{file_name}`
///
/// # Example Structure
///
/// ```text
/// /var/mediafill/media/
/// ├── 3f/
/// │   └── 3f2a9c.../
/// │       └── hero.png
/// └── a1/
///     └── a17be0.../
///         └── banner.jpg
/// ```
pub struct FileSystemStorage {
    base_path: PathBuf,
}

impl FileSystemStorage {
    /// Create a filesystem storage backend rooted at `base_path`.
    ///
    /// Nothing is created here. Directories appear on the first save.
    ///
    /// # Errors
    ///
    /// Returns error if `base_path` exists but is not a directory.
    #[tracing::instrument(skip(base_path))]
    pub fn new(base_path: impl Into<PathBuf>) -> MediafillResult<Self> {
        let base_path = base_path.into();

        if base_path.exists() && !base_path.is_dir() {
            return Err(StorageError::new(StorageErrorKind::InvalidPath(format!(
                "{} is not a directory",
                base_path.display()
            )))
            .into());
        }

        tracing::info!(path = %base_path.display(), "Opened filesystem storage");
        Ok(Self { base_path })
    }

    /// Directory holding the bytes for a record.
    ///
    /// Structure: `{base}/{id[0:2]}/{id}`
    fn record_dir(&self, id: &MediaId) -> PathBuf {
        let simple = id.simple();
        self.base_path.join(&simple[0..2]).join(&simple)
    }

    /// Reject names that would escape the record directory.
    fn check_file_name(file_name: &str) -> MediafillResult<()> {
        let invalid = file_name.is_empty()
            || file_name == "."
            || file_name == ".."
            || file_name.contains(['/', '\\', '\0'])
            || file_name.ends_with(TEMP_SUFFIX);
        if invalid {
            return Err(StorageError::new(StorageErrorKind::InvalidPath(format!(
                "invalid file name '{}'",
                file_name
            )))
            .into());
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl MediaStorage for FileSystemStorage {
    #[tracing::instrument(skip(self, id), fields(id = %id))]
    async fn load_bytes(&self, id: &MediaId) -> MediafillResult<Option<Vec<u8>>> {
        let dir = self.record_dir(id);

        let mut entries = match tokio::fs::read_dir(&dir).await {
            Ok(entries) => entries,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(StorageError::new(StorageErrorKind::FileRead(format!(
                    "{}: {}",
                    dir.display(),
                    e
                )))
                .into());
            }
        };

        let mut files = Vec::new();
        while let Some(entry) = entries.next_entry().await.map_err(|e| {
            StorageError::new(StorageErrorKind::FileRead(format!("{}: {}", dir.display(), e)))
        })? {
            let name = entry.file_name().to_string_lossy().to_string();
            if name.ends_with(TEMP_SUFFIX) {
                continue;
            }
            let is_file = entry.file_type().await.map(|t| t.is_file()).unwrap_or(false);
            if is_file {
                files.push(entry.path());
            }
        }
        files.sort();

        for path in files {
            let data = tokio::fs::read(&path).await.map_err(|e| {
                StorageError::new(StorageErrorKind::FileRead(format!(
                    "{}: {}",
                    path.display(),
                    e
                )))
            })?;
            if !data.is_empty() {
                tracing::debug!(path = %path.display(), size = data.len(), "Found stored bytes");
                return Ok(Some(data));
            }
        }

        Ok(None)
    }

    #[tracing::instrument(
        skip(self, data, id, context),
        fields(id = %id, size = data.len(), indexing_disabled = context.indexing_disabled)
    )]
    async fn save_bytes(
        &self,
        data: &[u8],
        file_name: &str,
        id: &MediaId,
        context: &ExecutionContext,
    ) -> MediafillResult<StoredMedia> {
        Self::check_file_name(file_name)?;
        if data.is_empty() {
            return Err(StorageError::new(StorageErrorKind::EmptyPayload(id.to_string())).into());
        }

        let dir = self.record_dir(id);
        let path = dir.join(file_name);

        tokio::fs::create_dir_all(&dir).await.map_err(|e| {
            StorageError::new(StorageErrorKind::DirectoryCreation(format!(
                "{}: {}",
                dir.display(),
                e
            )))
        })?;

        let exists = tokio::fs::try_exists(&path).await.map_err(|e| {
            StorageError::new(StorageErrorKind::FileRead(format!("{}: {}", path.display(), e)))
        })?;
        if exists {
            return Err(StorageError::new(StorageErrorKind::AlreadyExists(
                path.display().to_string(),
            ))
            .into());
        }

        // Write to temp file first, then rename for atomicity
        let temp_path = dir.join(format!("{}{}", file_name, TEMP_SUFFIX));
        tokio::fs::write(&temp_path, data).await.map_err(|e| {
            StorageError::new(StorageErrorKind::FileWrite(format!(
                "{}: {}",
                temp_path.display(),
                e
            )))
        })?;

        tokio::fs::rename(&temp_path, &path).await.map_err(|e| {
            StorageError::new(StorageErrorKind::FileWrite(format!(
                "rename {} to {}: {}",
                temp_path.display(),
                path.display(),
                e
            )))
        })?;

        let hash = compute_hash(data);
        tracing::info!(
            hash = %hash,
            path = %path.display(),
            size = data.len(),
            "Stored placeholder file"
        );

        Ok(StoredMedia {
            id: *id,
            content_hash: hash,
            storage_backend: self.backend_name().to_string(),
            storage_path: path.to_string_lossy().to_string(),
            size_bytes: data.len() as u64,
        })
    }

    fn validate_file_name(&self, file_name: &str) -> MediafillResult<()> {
        Self::check_file_name(file_name)
    }

    fn backend_name(&self) -> &'static str {
        "filesystem"
    }
}
