//! Tests for the PostgreSQL catalog repository.
//!
//! These need a database with the `media_records` table and `DATABASE_URL` set.

use mediafill_core::MimeType;
use mediafill_database::{PostgresCatalogRepository, create_pool, database_url};
use mediafill_interface::CatalogRepository;

#[tokio::test]
#[cfg_attr(not(feature = "api"), ignore)] // Requires DATABASE_URL
async fn test_list_candidate_ids_respects_limit() {
    dotenvy::dotenv().ok();
    let pool = create_pool(&database_url().unwrap()).unwrap();
    let repo = PostgresCatalogRepository::new(pool);

    let ids = repo
        .list_candidate_ids(&MimeType::candidates(), Some(2))
        .await
        .unwrap();
    assert!(ids.len() <= 2);

    let records = repo.fetch_by_ids(&ids).await.unwrap();
    assert!(records.len() <= ids.len());
    for record in records {
        assert!(record.supported_mime().is_some());
    }
}
