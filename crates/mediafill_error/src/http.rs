//! Placeholder service transport errors.

/// Ways a placeholder request can fail before a response is usable.
///
/// Status codes and empty bodies are not errors; the client reports those as
/// "nothing fetched".
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum HttpErrorKind {
    /// The HTTP client could not be constructed
    #[display("Failed to build HTTP client: {}", _0)]
    ClientBuild(String),
    /// Connecting, sending or waiting for the response failed (including timeouts)
    #[display("Request to {url} failed: {reason}")]
    Request {
        /// Requested URL
        url: String,
        /// Transport error text
        reason: String,
    },
    /// The response body could not be read to the end
    #[display("Failed to read body from {url}: {reason}")]
    Body {
        /// Requested URL
        url: String,
        /// Transport error text
        reason: String,
    },
}

/// HTTP error with source location.
///
/// # Examples
///
/// ```
/// use mediafill_error::{HttpError, HttpErrorKind};
///
/// let err = HttpError::new(HttpErrorKind::Request {
///     url: "https://placehold.co/1x1/png".to_string(),
///     reason: "connection refused".to_string(),
/// });
/// assert!(err.to_string().contains("connection refused"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("HTTP Error: {} at line {} in {}", kind, line, file)]
pub struct HttpError {
    /// What failed
    pub kind: HttpErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl HttpError {
    /// Create a new HttpError at the current location.
    #[track_caller]
    pub fn new(kind: HttpErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// URL of the failed request, if there was one.
    pub fn url(&self) -> Option<&str> {
        match &self.kind {
            HttpErrorKind::ClientBuild(_) => None,
            HttpErrorKind::Request { url, .. } | HttpErrorKind::Body { url, .. } => Some(url),
        }
    }
}
