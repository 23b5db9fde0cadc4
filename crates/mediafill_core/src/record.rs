//! Catalog record model.

use crate::{MediaId, MimeType};
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

/// One catalog entry, as hydrated from the catalog.
///
/// The mime type is kept as the raw catalog string. Records outside the
/// supported set are filtered out by the scanner, and the extension resolver
/// treats any that slip through as an internal error.
///
/// # Examples
///
/// ```
/// use mediafill_core::{MediaId, MediaRecordBuilder};
/// use serde_json::json;
///
/// let record = MediaRecordBuilder::default()
///     .id(MediaId::new_v4())
///     .file_name("hero")
///     .mime_type("image/png")
///     .metadata(json!({ "width": 300, "height": 200 }))
///     .build()
///     .unwrap();
///
/// assert_eq!(record.file_name(), "hero");
/// assert!(record.file_extension().is_none());
/// ```
#[derive(
    Debug,
    Clone,
    PartialEq,
    Serialize,
    Deserialize,
    derive_getters::Getters,
    derive_builder::Builder,
)]
#[builder(setter(into), build_fn(private, name = "build_internal"))]
pub struct MediaRecord {
    /// Stable record identifier.
    id: MediaId,

    /// Base file name, without extension.
    file_name: String,

    /// Mime type string as stored in the catalog.
    mime_type: String,

    /// Declared extension override. Only consulted for JPEG records.
    #[builder(setter(into, strip_option), default)]
    #[serde(default)]
    file_extension: Option<String>,

    /// Free-form metadata; `width` and `height` live here when known.
    #[builder(setter(into, strip_option), default)]
    #[serde(default)]
    metadata: Option<JsonValue>,
}

impl MediaRecordBuilder {
    /// Build the MediaRecord.
    ///
    /// # Errors
    ///
    /// Returns error if required fields are missing or the file name is empty.
    pub fn build(&self) -> Result<MediaRecord, String> {
        let record = self.build_internal().map_err(|e| e.to_string())?;
        if record.file_name.is_empty() {
            return Err("file_name must not be empty".to_string());
        }
        Ok(record)
    }
}

impl MediaRecord {
    /// Parsed mime type, or `None` if outside the supported set.
    pub fn supported_mime(&self) -> Option<MimeType> {
        self.mime_type.parse().ok()
    }
}
