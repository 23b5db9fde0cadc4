//! Media byte storage for mediafill.
//!
//! This crate provides the [`MediaStorage`](mediafill_interface::MediaStorage)
//! backends the pipeline reads from and writes placeholders into.
//!
//! # Features
//!
//! - **Record-addressed layout**: bytes live under a directory derived from the record id
//! - **Strictly additive**: existing files are never overwritten
//! - **Atomic writes**: temp file + rename, so readers never see half a placeholder
//!
//! # Example
//!
//! ```rust
//! use mediafill_core::{ExecutionContext, MediaId};
//! use mediafill_interface::MediaStorage;
//! use mediafill_storage::FileSystemStorage;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let storage = FileSystemStorage::new("/tmp/media")?;
//! let id = MediaId::new_v4();
//!
//! assert!(storage.load_bytes(&id).await?.is_none());
//! storage
//!     .save_bytes(b"png bytes", "hero.png", &id, &ExecutionContext::backfill())
//!     .await?;
//! assert!(storage.load_bytes(&id).await?.is_some());
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod filesystem;
mod memory;

pub use filesystem::FileSystemStorage;
pub use memory::{InMemoryStorage, SaveCall};
pub use mediafill_error::{StorageError, StorageErrorKind};

use sha2::{Digest, Sha256};

/// Compute the SHA-256 hash of data as lower-case hex.
pub(crate) fn compute_hash(data: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(data);
    format!("{:x}", hasher.finalize())
}
