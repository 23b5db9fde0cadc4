//! Error types for mediafill.
//!
//! This crate provides the foundation error types used throughout the mediafill workspace.
//!
//! # Error Hierarchy
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern for clean error handling:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - All errors use `#[track_caller]` for automatic location capture
//!
//! Errors are split into two families. Per-item errors (fill, HTTP, storage) are
//! absorbed by the pipeline and reported as advisories. Systemic errors (config,
//! database) abort the run; see [`MediafillError::is_systemic`].
//!
//! # Examples
//!
//! ```
//! use mediafill_error::{MediafillResult, HttpError, HttpErrorKind};
//!
//! fn fetch_data() -> MediafillResult<Vec<u8>> {
//!     Err(HttpError::new(HttpErrorKind::ClientBuild("no TLS backend".to_string())))?
//! }
//!
//! match fetch_data() {
//!     Ok(bytes) => println!("Got {} bytes", bytes.len()),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
#[cfg(feature = "database")]
mod database;
mod error;
mod fill;
mod http;
mod storage;

pub use config::ConfigError;
#[cfg(feature = "database")]
pub use database::{DatabaseError, DatabaseErrorKind};
pub use error::{MediafillError, MediafillErrorKind, MediafillResult};
pub use fill::{FillError, FillErrorKind};
pub use http::{HttpError, HttpErrorKind};
pub use storage::{StorageError, StorageErrorKind};
