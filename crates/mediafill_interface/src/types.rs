//! Shared value types.

use mediafill_core::MediaId;
use serde::Serialize;

/// Reference to bytes written by a [`MediaStorage`](crate::MediaStorage) backend.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct StoredMedia {
    /// Record the bytes belong to
    pub id: MediaId,
    /// SHA-256 hash of the content
    pub content_hash: String,
    /// Storage backend name (e.g., "filesystem", "memory")
    pub storage_backend: String,
    /// Backend-specific path/key to the bytes
    pub storage_path: String,
    /// Size of the payload in bytes
    pub size_bytes: u64,
}
