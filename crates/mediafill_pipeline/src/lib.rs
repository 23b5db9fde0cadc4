//! The mediafill backfill pipeline.
//!
//! A run goes scan → batch → verify → fill:
//!
//! 1. [`CandidateScanner`] lists identifiers of records with a supported mime type.
//! 2. [`BatchProcessor`] splits them into fixed-size chunks and hydrates each chunk.
//! 3. [`ItemFiller`] checks whether bytes already exist and, if not, fetches a
//!    placeholder of the right size and format and persists it.
//!
//! [`Backfill`] wires the three together for one run.
//!
//! # Example
//!
//! ```rust,ignore
//! use mediafill_pipeline::{Backfill, BackfillOptionsBuilder, TracingReporter};
//! use std::sync::Arc;
//!
//! let options = BackfillOptionsBuilder::default().dry_run(true).build()?;
//! let backfill = Backfill::new(catalog, storage, fetcher, Arc::new(TracingReporter::new()), options);
//! let summary = backfill.run(Some(500)).await?;
//! println!("{summary}");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod backfill;
mod batch;
mod config;
mod filler;
mod reporter;
mod scanner;

pub use backfill::{Backfill, BackfillOptions, BackfillOptionsBuilder};
pub use batch::{BatchProcessor, DEFAULT_CHUNK_SIZE};
pub use config::{BatchConfig, ContextConfig, MediafillConfig, PlaceholderConfig, StorageConfig};
pub use filler::{FillOutcome, ItemFiller};
pub use reporter::{RecordingReporter, TracingReporter};
pub use scanner::CandidateScanner;
