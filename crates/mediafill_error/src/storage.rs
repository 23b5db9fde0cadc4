//! Storage error types.

/// Kinds of storage errors.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum StorageErrorKind {
    /// Failed to create storage directory
    #[display("Failed to create storage directory: {}", _0)]
    DirectoryCreation(String),
    /// Failed to write file
    #[display("Failed to write file: {}", _0)]
    FileWrite(String),
    /// Failed to read file
    #[display("Failed to read file: {}", _0)]
    FileRead(String),
    /// A file is already present and would be overwritten
    #[display("File already exists: {}", _0)]
    AlreadyExists(String),
    /// Invalid storage path or file name
    #[display("Invalid storage path: {}", _0)]
    InvalidPath(String),
    /// Refusing to persist an empty payload
    #[display("Empty payload for {}", _0)]
    EmptyPayload(String),
}

impl StorageErrorKind {
    /// Whether the backend itself is unusable rather than one record's file.
    ///
    /// Directory creation and write failures point at the storage root (read-only
    /// mount, full disk, missing permissions). Conflicts, bad names, empty
    /// payloads and unreadable files are scoped to a single record.
    pub fn is_systemic(&self) -> bool {
        match self {
            StorageErrorKind::DirectoryCreation(_) | StorageErrorKind::FileWrite(_) => true,
            StorageErrorKind::FileRead(_)
            | StorageErrorKind::AlreadyExists(_)
            | StorageErrorKind::InvalidPath(_)
            | StorageErrorKind::EmptyPayload(_) => false,
        }
    }
}

/// Storage error with location tracking.
///
/// # Examples
///
/// ```
/// use mediafill_error::{StorageError, StorageErrorKind};
///
/// let err = StorageError::new(StorageErrorKind::FileRead("/path/to/file".to_string()));
/// assert!(format!("{}", err).contains("Failed to read"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Storage Error: {} at line {} in {}", kind, line, file)]
pub struct StorageError {
    /// The kind of error that occurred
    pub kind: StorageErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl StorageError {
    /// Create a new storage error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: StorageErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MediafillError;

    #[test]
    fn backend_failures_are_systemic() {
        let err: MediafillError =
            StorageError::new(StorageErrorKind::FileWrite("/media/ab/x.png".to_string())).into();
        assert!(err.is_systemic());
        assert!(StorageErrorKind::DirectoryCreation("/media".to_string()).is_systemic());
    }

    #[test]
    fn record_scoped_failures_are_not_systemic() {
        for kind in [
            StorageErrorKind::AlreadyExists("a".to_string()),
            StorageErrorKind::InvalidPath("..".to_string()),
            StorageErrorKind::EmptyPayload("a".to_string()),
            StorageErrorKind::FileRead("a".to_string()),
        ] {
            let err: MediafillError = StorageError::new(kind).into();
            assert!(!err.is_systemic());
        }
    }
}
