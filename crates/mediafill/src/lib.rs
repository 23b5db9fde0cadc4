//! Mediafill - placeholder backfill for media catalogs
//!
//! Mediafill walks a media catalog, finds image records whose binary bytes are
//! missing from storage, and fills each gap with a placeholder image of the
//! recorded width, height and format fetched from a placeholder service.
//!
//! # Features
//!
//! - **Identifier-only scan**: candidates are listed without hydrating records
//! - **Chunked hydration**: one catalog round-trip per chunk of identifiers
//! - **Idempotent fills**: existing bytes are never fetched for or overwritten
//! - **Dry runs**: report every gap without touching the network or storage
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use mediafill::{Backfill, BackfillOptionsBuilder, FileSystemStorage, PlaceholderClient,
//!     PostgresCatalogRepository, TracingReporter, create_pool};
//! use std::{sync::Arc, time::Duration};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let pool = create_pool(&std::env::var("DATABASE_URL")?)?;
//!     let backfill = Backfill::new(
//!         Arc::new(PostgresCatalogRepository::new(pool)),
//!         Arc::new(FileSystemStorage::new("./media")?),
//!         Arc::new(PlaceholderClient::new(Duration::from_secs(30), "mediafill")?),
//!         Arc::new(TracingReporter::new()),
//!         BackfillOptionsBuilder::default().build()?,
//!     );
//!     println!("{}", backfill.run(None).await?);
//!     Ok(())
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod cli;
pub mod observability;

pub use mediafill_core::*;
pub use mediafill_database::{
    InMemoryCatalogRepository, PgPool, PostgresCatalogRepository, create_pool, database_url,
};
pub use mediafill_error::*;
pub use mediafill_fetch::{DEFAULT_BASE_URL, DEFAULT_USER_AGENT, PlaceholderClient};
pub use mediafill_interface::*;
pub use mediafill_pipeline::*;
pub use mediafill_storage::{FileSystemStorage, InMemoryStorage};
