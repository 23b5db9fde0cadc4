//! Test utilities for pipeline tests.
//!
//! This module provides mock collaborators and record helpers.

pub mod mock_fetcher;

#[allow(unused_imports)]
pub use mock_fetcher::{FetchCall, MockBehavior, MockFetcher};

use mediafill_core::{MediaId, MediaRecord, MediaRecordBuilder};
use serde_json::json;

/// Build a record with width/height metadata.
#[allow(dead_code)]
pub fn record_with_size(file_name: &str, mime_type: &str, width: u32, height: u32) -> MediaRecord {
    MediaRecordBuilder::default()
        .id(MediaId::new_v4())
        .file_name(file_name)
        .mime_type(mime_type)
        .metadata(json!({ "width": width, "height": height }))
        .build()
        .unwrap()
}

/// Build a record without any metadata.
#[allow(dead_code)]
pub fn record_without_metadata(file_name: &str, mime_type: &str) -> MediaRecord {
    MediaRecordBuilder::default()
        .id(MediaId::new_v4())
        .file_name(file_name)
        .mime_type(mime_type)
        .build()
        .unwrap()
}
