//! Placeholder service request composition.
//!
//! The path layout `{width}x{height}/{extension}` is the contract with the
//! external placeholder service.

use crate::Dimensions;

/// A fully derived placeholder request for one record.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PlaceholderRequest {
    /// Image size to synthesize
    pub dimensions: Dimensions,
    /// File extension, which also selects the image format
    pub extension: String,
}

impl PlaceholderRequest {
    /// Absolute URL against the given service base.
    pub fn url(&self, base_url: &str) -> String {
        placeholder_url(base_url, self.dimensions, &self.extension)
    }
}

/// Compose the placeholder service URL.
///
/// Trailing slashes on `base_url` are ignored.
pub fn placeholder_url(base_url: &str, dimensions: Dimensions, extension: &str) -> String {
    format!(
        "{}/{}x{}/{}",
        base_url.trim_end_matches('/'),
        dimensions.width,
        dimensions.height,
        extension
    )
}
