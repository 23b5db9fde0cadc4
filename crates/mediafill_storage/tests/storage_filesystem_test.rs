//! Tests for filesystem storage backend.

use mediafill_core::{ExecutionContext, MediaId};
use mediafill_error::{MediafillErrorKind, StorageErrorKind};
use mediafill_interface::MediaStorage;
use mediafill_storage::FileSystemStorage;
use tempfile::TempDir;

#[tokio::test]
async fn test_missing_record_loads_none() {
    let temp_dir = TempDir::new().unwrap();
    let storage = FileSystemStorage::new(temp_dir.path()).unwrap();

    let loaded = storage.load_bytes(&MediaId::new_v4()).await.unwrap();
    assert!(loaded.is_none());
}

#[tokio::test]
async fn test_save_then_load() {
    let temp_dir = TempDir::new().unwrap();
    let storage = FileSystemStorage::new(temp_dir.path()).unwrap();
    let id = MediaId::new_v4();

    let data = b"\x89PNG placeholder";
    let stored = storage
        .save_bytes(data, "hero.png", &id, &ExecutionContext::backfill())
        .await
        .unwrap();

    assert_eq!(stored.storage_backend, "filesystem");
    assert_eq!(stored.size_bytes, data.len() as u64);
    assert_eq!(stored.content_hash.len(), 64);
    assert!(stored.storage_path.ends_with("hero.png"));

    let loaded = storage.load_bytes(&id).await.unwrap();
    assert_eq!(loaded.as_deref(), Some(&data[..]));
}

#[tokio::test]
async fn test_layout_is_record_addressed() {
    let temp_dir = TempDir::new().unwrap();
    let storage = FileSystemStorage::new(temp_dir.path()).unwrap();
    let id = MediaId::new_v4();

    storage
        .save_bytes(b"jpeg", "banner.jpg", &id, &ExecutionContext::backfill())
        .await
        .unwrap();

    let simple = id.simple();
    let expected = temp_dir
        .path()
        .join(&simple[0..2])
        .join(&simple)
        .join("banner.jpg");
    assert!(expected.exists());
    assert!(!expected.with_file_name("banner.jpg.tmp").exists());
}

#[tokio::test]
async fn test_empty_file_counts_as_missing() {
    let temp_dir = TempDir::new().unwrap();
    let storage = FileSystemStorage::new(temp_dir.path()).unwrap();
    let id = MediaId::new_v4();

    let simple = id.simple();
    let dir = temp_dir.path().join(&simple[0..2]).join(&simple);
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(dir.join("broken.png"), b"").unwrap();
    std::fs::write(dir.join("partial.png.tmp"), b"half").unwrap();

    assert!(storage.load_bytes(&id).await.unwrap().is_none());
}

#[tokio::test]
async fn test_never_overwrites_existing_file() {
    let temp_dir = TempDir::new().unwrap();
    let storage = FileSystemStorage::new(temp_dir.path()).unwrap();
    let id = MediaId::new_v4();
    let ctx = ExecutionContext::backfill();

    storage.save_bytes(b"original", "a.png", &id, &ctx).await.unwrap();
    let err = storage
        .save_bytes(b"replacement", "a.png", &id, &ctx)
        .await
        .unwrap_err();

    match err.kind() {
        MediafillErrorKind::Storage(e) => {
            assert!(matches!(e.kind, StorageErrorKind::AlreadyExists(_)))
        }
        other => panic!("unexpected error: {other}"),
    }
    assert_eq!(
        storage.load_bytes(&id).await.unwrap().as_deref(),
        Some(&b"original"[..])
    );
}

#[tokio::test]
async fn test_rejects_path_traversal() {
    let temp_dir = TempDir::new().unwrap();
    let storage = FileSystemStorage::new(temp_dir.path()).unwrap();
    let ctx = ExecutionContext::backfill();

    for name in ["", "..", "../escape.png", "nested/file.png", "x.tmp"] {
        let result = storage
            .save_bytes(b"data", name, &MediaId::new_v4(), &ctx)
            .await;
        assert!(result.is_err(), "accepted file name {name:?}");
    }
}

#[tokio::test]
async fn test_rejects_empty_payload() {
    let temp_dir = TempDir::new().unwrap();
    let storage = FileSystemStorage::new(temp_dir.path()).unwrap();

    let result = storage
        .save_bytes(b"", "a.png", &MediaId::new_v4(), &ExecutionContext::backfill())
        .await;
    assert!(result.is_err());
}

#[tokio::test]
async fn test_open_creates_nothing_until_save() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().join("media");
    let storage = FileSystemStorage::new(&root).unwrap();
    let id = MediaId::new_v4();

    assert!(!root.exists());
    assert_eq!(storage.load_bytes(&id).await.unwrap(), None);
    assert!(!root.exists());

    storage
        .save_bytes(b"png", "hero.png", &id, &ExecutionContext::backfill())
        .await
        .unwrap();
    assert!(root.is_dir());
}

#[tokio::test]
async fn test_root_that_is_a_file_is_rejected() {
    let temp_dir = TempDir::new().unwrap();
    let file = temp_dir.path().join("media");
    std::fs::write(&file, b"not a directory").unwrap();

    assert!(FileSystemStorage::new(&file).is_err());
}

#[test]
fn test_validate_file_name_matches_save_rules() {
    let temp_dir = TempDir::new().unwrap();
    let storage = FileSystemStorage::new(temp_dir.path()).unwrap();

    assert!(storage.validate_file_name("hero.png").is_ok());
    for name in ["", "..", "../escape.png", "nested/file.png", "x.tmp"] {
        let err = storage.validate_file_name(name).unwrap_err();
        assert!(!err.is_systemic());
        match err.kind() {
            MediafillErrorKind::Storage(e) => {
                assert!(matches!(e.kind, StorageErrorKind::InvalidPath(_)))
            }
            other => panic!("unexpected error kind: {}", other),
        }
    }
}

#[tokio::test]
async fn test_write_failure_under_unwritable_root_is_systemic() {
    let temp_dir = TempDir::new().unwrap();
    // A regular file in place of the shard directory blocks directory creation.
    let id = MediaId::new_v4();
    let simple = id.simple();
    std::fs::write(temp_dir.path().join(&simple[0..2]), b"blocker").unwrap();
    let storage = FileSystemStorage::new(temp_dir.path()).unwrap();

    let err = storage
        .save_bytes(b"png", "hero.png", &id, &ExecutionContext::backfill())
        .await
        .unwrap_err();

    assert!(err.is_systemic());
}
