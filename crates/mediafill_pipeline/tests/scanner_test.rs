//! Tests for candidate discovery.

mod test_utils;

use mediafill_database::InMemoryCatalogRepository;
use mediafill_pipeline::CandidateScanner;
use std::sync::Arc;
use test_utils::record_with_size;

async fn catalog_with(mime_types: &[&str]) -> InMemoryCatalogRepository {
    let catalog = InMemoryCatalogRepository::new();
    for (i, mime) in mime_types.iter().enumerate() {
        catalog
            .insert(record_with_size(&format!("r{}", i), mime, 10, 10))
            .await;
    }
    catalog
}

#[tokio::test]
async fn test_only_supported_mime_types() {
    let catalog = catalog_with(&["image/png", "image/gif", "image/jpeg", "video/mp4", "image/webp"]).await;
    let scanner = CandidateScanner::new(Arc::new(catalog));

    let ids = scanner.scan(None).await.unwrap();

    assert_eq!(ids.len(), 3);
}

#[tokio::test]
async fn test_limit_bounds_result() {
    let catalog = catalog_with(&["image/png"; 10]).await;
    let scanner = CandidateScanner::new(Arc::new(catalog));

    assert_eq!(scanner.scan(Some(4)).await.unwrap().len(), 4);
    assert_eq!(scanner.scan(Some(50)).await.unwrap().len(), 10);
}

#[tokio::test]
async fn test_zero_limit_means_unlimited() {
    let catalog = catalog_with(&["image/png"; 7]).await;
    let scanner = CandidateScanner::new(Arc::new(catalog));

    assert_eq!(scanner.scan(Some(0)).await.unwrap().len(), 7);
}

#[tokio::test]
async fn test_empty_catalog() {
    let scanner = CandidateScanner::new(Arc::new(InMemoryCatalogRepository::new()));
    assert!(scanner.scan(None).await.unwrap().is_empty());
}
