//! Supported image mime types.

use strum::IntoEnumIterator;

/// Mime types the backfill knows how to synthesize.
///
/// A record is a candidate only if its mime type is one of these.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::EnumIter,
    derive_more::Display,
)]
pub enum MimeType {
    /// JPEG image
    #[display("image/jpeg")]
    Jpeg,
    /// PNG image
    #[display("image/png")]
    Png,
    /// WebP image
    #[display("image/webp")]
    Webp,
}

impl MimeType {
    /// Mime type string as stored in the catalog.
    pub fn as_str(&self) -> &'static str {
        match self {
            MimeType::Jpeg => "image/jpeg",
            MimeType::Png => "image/png",
            MimeType::Webp => "image/webp",
        }
    }

    /// Every supported mime type string, in declaration order.
    pub fn candidates() -> Vec<&'static str> {
        MimeType::iter().map(|m| m.as_str()).collect()
    }
}

impl std::str::FromStr for MimeType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "image/jpeg" => Ok(MimeType::Jpeg),
            "image/png" => Ok(MimeType::Png),
            "image/webp" => Ok(MimeType::Webp),
            _ => Err(format!("Unsupported mime type: {}", s)),
        }
    }
}
