//! Tests for the in-memory catalog repository.

use mediafill_core::{MediaId, MediaRecord, MediaRecordBuilder, MimeType};
use mediafill_database::InMemoryCatalogRepository;
use mediafill_interface::CatalogRepository;

fn record(mime: &str) -> MediaRecord {
    MediaRecordBuilder::default()
        .id(MediaId::new_v4())
        .file_name("file")
        .mime_type(mime)
        .build()
        .unwrap()
}

#[tokio::test]
async fn test_lists_only_matching_mime_types_in_order() {
    let catalog = InMemoryCatalogRepository::new();
    let png = record("image/png");
    let gif = record("image/gif");
    let jpeg = record("image/jpeg");
    for r in [&png, &gif, &jpeg] {
        catalog.insert(r.clone()).await;
    }

    let ids = catalog
        .list_candidate_ids(&MimeType::candidates(), None)
        .await
        .unwrap();

    assert_eq!(ids, vec![*png.id(), *jpeg.id()]);
}

#[tokio::test]
async fn test_limit_truncates() {
    let catalog = InMemoryCatalogRepository::new();
    for _ in 0..5 {
        catalog.insert(record("image/webp")).await;
    }

    let ids = catalog
        .list_candidate_ids(&["image/webp"], Some(3))
        .await
        .unwrap();
    assert_eq!(ids.len(), 3);
}

#[tokio::test]
async fn test_hydrate_skips_unknown_ids() {
    let catalog = InMemoryCatalogRepository::new();
    let kept = record("image/png");
    catalog.insert(kept.clone()).await;

    let records = catalog
        .fetch_by_ids(&[*kept.id(), MediaId::new_v4()])
        .await
        .unwrap();

    assert_eq!(records, vec![kept]);
    assert_eq!(catalog.hydrate_calls(), 1);
}

#[tokio::test]
async fn test_hydrate_failure_is_a_database_error() {
    let catalog = InMemoryCatalogRepository::new();
    catalog.set_fail_hydrate(true);

    let err = catalog.fetch_by_ids(&[MediaId::new_v4()]).await.unwrap_err();
    assert!(err.is_systemic());
}
