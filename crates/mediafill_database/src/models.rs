//! Row types for the `media_records` table.

use crate::schema::media_records;
use diesel::prelude::*;
use mediafill_core::{MediaRecord, MediaRecordBuilder};
use serde_json::Value as JsonValue;

/// A `media_records` row as loaded by Diesel.
#[derive(Debug, Clone, PartialEq, Queryable, Selectable)]
#[diesel(table_name = media_records)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct MediaRecordRow {
    /// Record identifier
    pub id: uuid::Uuid,
    /// Base file name
    pub file_name: String,
    /// Mime type string
    pub mime_type: String,
    /// Declared extension override
    pub file_extension: Option<String>,
    /// Free-form metadata
    pub metadata: Option<JsonValue>,
}

impl TryFrom<MediaRecordRow> for MediaRecord {
    type Error = String;

    fn try_from(row: MediaRecordRow) -> Result<Self, Self::Error> {
        let mut builder = MediaRecordBuilder::default();
        builder
            .id(row.id)
            .file_name(row.file_name)
            .mime_type(row.mime_type);
        if let Some(ext) = row.file_extension {
            builder.file_extension(ext);
        }
        if let Some(meta) = row.metadata {
            builder.metadata(meta);
        }
        builder.build()
    }
}
