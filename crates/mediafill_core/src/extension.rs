//! Mime type to file extension mapping.

use crate::MimeType;
use mediafill_error::{FillError, FillErrorKind};

/// Resolve the file extension for a placeholder of the given mime type.
///
/// - `image/jpeg` uses the declared extension when present, else `jpg`
/// - `image/png` is always `png`
/// - `image/webp` is always `webp`
///
/// Blank declared extensions count as absent, and a leading dot is dropped.
///
/// # Errors
///
/// Any other mime type is an internal invariant violation, reported as
/// [`FillErrorKind::UnsupportedFormat`].
///
/// # Examples
///
/// ```
/// use mediafill_core::resolve_extension;
///
/// assert_eq!(resolve_extension("image/jpeg", Some("jpeg")).unwrap(), "jpeg");
/// assert_eq!(resolve_extension("image/jpeg", None).unwrap(), "jpg");
/// assert!(resolve_extension("image/gif", None).is_err());
/// ```
pub fn resolve_extension(mime_type: &str, declared: Option<&str>) -> Result<String, FillError> {
    let mime: MimeType = mime_type.parse().map_err(|_| {
        FillError::new(FillErrorKind::UnsupportedFormat(mime_type.to_string()))
    })?;

    let extension = match mime {
        MimeType::Jpeg => declared
            .map(|ext| ext.trim().trim_start_matches('.'))
            .filter(|ext| !ext.is_empty())
            .unwrap_or("jpg"),
        MimeType::Png => "png",
        MimeType::Webp => "webp",
    };

    Ok(extension.to_string())
}
