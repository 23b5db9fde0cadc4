//! Per-item fill error types.

/// Reasons a single record could not be filled.
///
/// None of these abort a run. The pipeline reports them as advisories and moves
/// on to the next record.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum FillErrorKind {
    /// A record reached extension resolution with a mime type outside the supported set
    #[display("Unsupported mime type: {}", _0)]
    UnsupportedFormat(String),
    /// Width or height is missing or not a positive integer
    #[display("Incomplete metadata: {}", _0)]
    IncompleteMetadata(String),
    /// The placeholder service returned nothing usable
    #[display("Placeholder fetch failed: {}", _0)]
    FetchFailure(String),
}

/// Fill error with location tracking.
///
/// # Examples
///
/// ```
/// use mediafill_error::{FillError, FillErrorKind};
///
/// let err = FillError::new(FillErrorKind::UnsupportedFormat("image/gif".to_string()));
/// assert!(format!("{}", err).contains("image/gif"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Fill Error: {} at line {} in {}", kind, line, file)]
pub struct FillError {
    /// The kind of error that occurred
    pub kind: FillErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl FillError {
    /// Create a new fill error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: FillErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
