//! Top-level error wrapper types.

use crate::{ConfigError, FillError, HttpError, StorageError};
#[cfg(feature = "database")]
use crate::DatabaseError;

/// Every error a mediafill operation can produce.
///
/// # Examples
///
/// ```
/// use mediafill_error::{MediafillError, HttpError, HttpErrorKind};
///
/// let http_err = HttpError::new(HttpErrorKind::ClientBuild("no TLS backend".to_string()));
/// let err: MediafillError = http_err.into();
/// assert!(format!("{}", err).contains("HTTP Error"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum MediafillErrorKind {
    /// HTTP error
    #[from(HttpError)]
    Http(HttpError),
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
    /// Storage error
    #[from(StorageError)]
    Storage(StorageError),
    /// Per-item fill error
    #[from(FillError)]
    Fill(FillError),
    /// Database error
    #[cfg(feature = "database")]
    #[from(DatabaseError)]
    Database(DatabaseError),
}

/// Mediafill error with kind discrimination.
///
/// # Examples
///
/// ```
/// use mediafill_error::{MediafillError, MediafillResult, ConfigError};
///
/// fn might_fail() -> MediafillResult<()> {
///     Err(ConfigError::new("Missing field"))?
/// }
///
/// let err = might_fail().unwrap_err();
/// assert!(err.is_systemic());
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Mediafill Error: {}", _0)]
pub struct MediafillError(Box<MediafillErrorKind>);

impl MediafillError {
    /// Create a new error from a kind.
    pub fn new(kind: MediafillErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &MediafillErrorKind {
        &self.0
    }

    /// Whether this error means a collaborator is unusable and the run must stop.
    ///
    /// Configuration and database failures are systemic, as are storage
    /// failures that affect the whole backend (see [`crate::StorageErrorKind::is_systemic`]).
    /// Fill and HTTP failures and record-scoped storage failures concern a
    /// single record.
    pub fn is_systemic(&self) -> bool {
        match self.kind() {
            MediafillErrorKind::Config(_) => true,
            #[cfg(feature = "database")]
            MediafillErrorKind::Database(_) => true,
            MediafillErrorKind::Storage(e) => e.kind.is_systemic(),
            MediafillErrorKind::Http(_) | MediafillErrorKind::Fill(_) => false,
        }
    }
}

// Generic From implementation for any type that converts to MediafillErrorKind
impl<T> From<T> for MediafillError
where
    T: Into<MediafillErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for mediafill operations.
pub type MediafillResult<T> = std::result::Result<T, MediafillError>;
