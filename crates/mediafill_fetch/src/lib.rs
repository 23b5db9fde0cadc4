//! HTTP client for the external placeholder image service.
//!
//! The service answers `GET {base}/{width}x{height}/{extension}` with raw image
//! bytes. [`PlaceholderClient`] implements
//! [`ImageFetcher`](mediafill_interface::ImageFetcher) against it.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod client;

pub use client::PlaceholderClient;

/// Default placeholder service.
pub const DEFAULT_BASE_URL: &str = "https://placehold.co";

/// Default user agent sent with every request.
pub const DEFAULT_USER_AGENT: &str = concat!("mediafill/", env!("CARGO_PKG_VERSION"));
