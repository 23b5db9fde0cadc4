//! Tests for chunked hydration and counting.

mod test_utils;

use mediafill_core::{ExecutionContext, MediaId, MediaRecord};
use mediafill_database::InMemoryCatalogRepository;
use mediafill_pipeline::{BatchProcessor, ItemFiller, RecordingReporter};
use mediafill_storage::InMemoryStorage;
use std::sync::Arc;
use test_utils::{MockFetcher, record_with_size, record_without_metadata};

struct Harness {
    catalog: InMemoryCatalogRepository,
    storage: InMemoryStorage,
    fetcher: MockFetcher,
    reporter: Arc<RecordingReporter>,
}

impl Harness {
    fn new(fetcher: MockFetcher) -> Self {
        Self {
            catalog: InMemoryCatalogRepository::new(),
            storage: InMemoryStorage::new(),
            fetcher,
            reporter: Arc::new(RecordingReporter::new()),
        }
    }

    async fn seed(&self, records: Vec<MediaRecord>) -> Vec<MediaId> {
        let mut ids = Vec::new();
        for record in records {
            ids.push(*record.id());
            self.catalog.insert(record).await;
        }
        ids
    }

    fn processor(&self, chunk_size: usize, concurrency: usize, dry_run: bool) -> BatchProcessor {
        let filler = ItemFiller::new(
            Arc::new(self.storage.clone()),
            Arc::new(self.fetcher.clone()),
            self.reporter.clone(),
            "https://placehold.co",
            dry_run,
            ExecutionContext::backfill(),
        );
        BatchProcessor::new(
            Arc::new(self.catalog.clone()),
            filler,
            self.reporter.clone(),
            chunk_size,
            concurrency,
        )
    }
}

fn pngs(count: usize) -> Vec<MediaRecord> {
    (0..count)
        .map(|i| record_with_size(&format!("img{}", i), "image/png", 100 + i as u32, 50))
        .collect()
}

#[tokio::test]
async fn test_hydrates_once_per_chunk() {
    let harness = Harness::new(MockFetcher::new_bytes(b"png".to_vec()));
    let ids = harness.seed(pngs(250)).await;

    let summary = harness.processor(100, 1, false).run(&ids).await.unwrap();

    assert_eq!(harness.catalog.hydrate_calls(), 3);
    assert_eq!(harness.reporter.progress(), vec![100, 100, 50]);
    assert_eq!(summary.total, 250);
    assert_eq!(summary.updated, 250);
    assert_eq!(harness.reporter.summaries(), vec![summary]);
}

#[tokio::test]
async fn test_second_run_is_idempotent() {
    let harness = Harness::new(MockFetcher::new_bytes(b"png".to_vec()));
    let ids = harness.seed(pngs(5)).await;

    let first = harness.processor(2, 1, false).run(&ids).await.unwrap();
    let second = harness.processor(2, 1, false).run(&ids).await.unwrap();

    assert_eq!(first.updated, 5);
    assert_eq!(second.total, 5);
    assert_eq!(second.updated, 0);
    assert_eq!(second.present, 5);
    assert_eq!(harness.fetcher.call_count(), 5);
    assert_eq!(harness.storage.saves().await.len(), 5);
}

#[tokio::test]
async fn test_mixed_outcomes_are_counted() {
    let harness = Harness::new(MockFetcher::new_bytes(b"png".to_vec()));
    let present = record_with_size("present", "image/png", 10, 10);
    harness
        .storage
        .insert(*present.id(), "present.png", b"old".to_vec())
        .await;
    let ids = harness
        .seed(vec![
            present,
            record_with_size("fill", "image/webp", 10, 10),
            record_without_metadata("nosize", "image/jpeg"),
            record_with_size("gif", "image/gif", 10, 10),
        ])
        .await;

    let summary = harness.processor(10, 1, false).run(&ids).await.unwrap();

    assert_eq!(summary.total, 4);
    assert_eq!(summary.updated, 1);
    assert_eq!(summary.present, 1);
    assert_eq!(summary.skipped, 1);
    assert_eq!(summary.failed, 1);
    assert_eq!(harness.reporter.advisories().len(), 2);
}

#[tokio::test]
async fn test_dry_run_counts_without_writing() {
    let harness = Harness::new(MockFetcher::new_bytes(b"png".to_vec()));
    let ids = harness.seed(pngs(3)).await;

    let summary = harness.processor(10, 1, true).run(&ids).await.unwrap();

    assert_eq!(summary.total, 3);
    assert_eq!(summary.updated, 0);
    assert_eq!(summary.skipped, 3);
    assert_eq!(harness.fetcher.call_count(), 0);
    assert!(harness.storage.is_empty().await);
    assert_eq!(harness.reporter.advisories().len(), 3);
}

#[tokio::test]
async fn test_hydrate_failure_aborts_run() {
    let harness = Harness::new(MockFetcher::new_bytes(b"png".to_vec()));
    let ids = harness.seed(pngs(3)).await;
    harness.catalog.set_fail_hydrate(true);

    let err = harness.processor(10, 1, false).run(&ids).await.unwrap_err();

    assert!(err.is_systemic());
    assert_eq!(harness.fetcher.call_count(), 0);
    assert!(harness.reporter.progress().is_empty());
    assert!(harness.reporter.summaries().is_empty());
}

#[tokio::test]
async fn test_unwritable_storage_aborts_after_first_failure() {
    let harness = Harness::new(MockFetcher::new_bytes(b"png".to_vec()));
    let ids = harness.seed(pngs(5)).await;
    harness.storage.set_fail_saves(true);

    let err = harness.processor(10, 1, false).run(&ids).await.unwrap_err();

    assert!(err.is_systemic());
    assert_eq!(harness.fetcher.call_count(), 1);
    assert!(harness.reporter.progress().is_empty());
    assert!(harness.reporter.summaries().is_empty());
}

#[tokio::test]
async fn test_deleted_between_scan_and_hydrate() {
    let harness = Harness::new(MockFetcher::new_bytes(b"png".to_vec()));
    let ids = harness.seed(pngs(4)).await;
    harness.catalog.remove(&ids[1]).await;

    let summary = harness.processor(10, 1, false).run(&ids).await.unwrap();

    assert_eq!(summary.total, 3);
    assert_eq!(summary.updated, 3);
    assert_eq!(harness.reporter.progress(), vec![3]);
}

#[tokio::test]
async fn test_concurrent_fills_within_chunk() {
    let harness = Harness::new(MockFetcher::new_bytes(b"png".to_vec()));
    let ids = harness.seed(pngs(40)).await;

    let summary = harness.processor(16, 8, false).run(&ids).await.unwrap();

    assert_eq!(summary.total, 40);
    assert_eq!(summary.updated, 40);
    assert_eq!(harness.reporter.progress(), vec![16, 16, 8]);
    assert_eq!(harness.storage.len().await, 40);
}

#[tokio::test]
async fn test_empty_candidate_list() {
    let harness = Harness::new(MockFetcher::new_bytes(b"png".to_vec()));

    let summary = harness.processor(10, 1, false).run(&[]).await.unwrap();

    assert_eq!(summary.total, 0);
    assert_eq!(harness.catalog.hydrate_calls(), 0);
    assert_eq!(harness.reporter.summaries().len(), 1);
}
