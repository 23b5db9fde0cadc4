//! Core data types for mediafill.
//!
//! This crate holds the catalog record model and the pure functions that turn a
//! record's partial metadata into a placeholder request:
//!
//! - [`resolve_extension`] maps a mime type to a file extension
//! - [`extract_dimensions`] reads width/height out of record metadata
//! - [`placeholder_url`] composes the placeholder service URL
//!
//! # Example
//!
//! ```
//! use mediafill_core::{extract_dimensions, placeholder_url, resolve_extension};
//! use serde_json::json;
//!
//! let metadata = json!({ "width": 300, "height": 200 });
//! let dimensions = extract_dimensions(Some(&metadata)).unwrap();
//! let extension = resolve_extension("image/png", None).unwrap();
//!
//! let url = placeholder_url("https://placehold.co", dimensions, &extension);
//! assert_eq!(url, "https://placehold.co/300x200/png");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod context;
mod dimensions;
mod extension;
mod id;
mod mime;
mod placeholder;
mod record;
mod stats;

pub use context::ExecutionContext;
pub use dimensions::{Dimensions, extract_dimensions};
pub use extension::resolve_extension;
pub use id::MediaId;
pub use mime::MimeType;
pub use placeholder::{PlaceholderRequest, placeholder_url};
pub use record::{MediaRecord, MediaRecordBuilder};
pub use stats::{RunStats, RunSummary};
