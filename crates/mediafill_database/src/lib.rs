//! Catalog access for mediafill.
//!
//! This crate implements [`CatalogRepository`](mediafill_interface::CatalogRepository)
//! on top of the PostgreSQL `media_records` table, plus an in-memory variant for
//! tests.
//!
//! # Features
//!
//! - Diesel-based PostgreSQL integration with an r2d2 pool
//! - Identifier-only candidate listing, so the scan never hydrates the whole catalog
//! - Set-based hydration of identifier chunks
//!
//! # Example
//!
//! ```rust,ignore
//! use mediafill_database::{create_pool, PostgresCatalogRepository};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let pool = create_pool(&std::env::var("DATABASE_URL")?)?;
//! let repo = PostgresCatalogRepository::new(pool);
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod catalog_repository;
mod connection;
mod memory;
mod models;

// Public modules for external access
#[allow(missing_docs)]
pub mod schema;

pub use catalog_repository::PostgresCatalogRepository;
pub use connection::{PgPool, create_pool, database_url};
pub use memory::InMemoryCatalogRepository;
pub use models::MediaRecordRow;

use mediafill_error::DatabaseError;

/// Result type for database operations.
pub type DatabaseResult<T> = Result<T, DatabaseError>;
