//! Trait definitions for the collaborators the mediafill pipeline calls.
//!
//! The pipeline owns none of the durable state it touches. Catalog queries,
//! byte storage, the placeholder HTTP service and progress output are all
//! reached through the traits in this crate, so backends can be swapped and
//! tests can run entirely in memory.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod traits;
mod types;

pub use traits::{CatalogRepository, ImageFetcher, MediaStorage, ProgressReporter};
pub use types::StoredMedia;
