//! PostgreSQL implementation of CatalogRepository.

use crate::schema::media_records;
use crate::{MediaRecordRow, PgPool};
use async_trait::async_trait;
use diesel::prelude::*;
use mediafill_core::{MediaId, MediaRecord};
use mediafill_error::{DatabaseError, DatabaseErrorKind, MediafillResult};
use mediafill_interface::CatalogRepository;

/// Catalog repository backed by the `media_records` table.
///
/// Diesel calls are blocking, so each query runs on the blocking thread pool
/// with a connection checked out of the r2d2 pool.
#[derive(Clone)]
pub struct PostgresCatalogRepository {
    pool: PgPool,
}

impl PostgresCatalogRepository {
    /// Create a new catalog repository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn with_connection<T, F>(&self, f: F) -> MediafillResult<T>
    where
        T: Send + 'static,
        F: FnOnce(&mut PgConnection) -> Result<T, DatabaseError> + Send + 'static,
    {
        let pool = self.pool.clone();
        let result = tokio::task::spawn_blocking(move || {
            let mut conn = pool.get()?;
            f(&mut conn)
        })
        .await
        .map_err(|e| DatabaseError::new(DatabaseErrorKind::Query(e.to_string())))?;
        Ok(result?)
    }
}

#[async_trait]
impl CatalogRepository for PostgresCatalogRepository {
    #[tracing::instrument(skip(self, mime_types), fields(mime_types = ?mime_types))]
    async fn list_candidate_ids(
        &self,
        mime_types: &[&str],
        limit: Option<u64>,
    ) -> MediafillResult<Vec<MediaId>> {
        let mime_types: Vec<String> = mime_types.iter().map(|m| m.to_string()).collect();

        let ids = self
            .with_connection(move |conn| {
                let mut query = media_records::table
                    .select(media_records::id)
                    .filter(media_records::mime_type.eq_any(mime_types))
                    .into_boxed();

                if let Some(limit) = limit {
                    query = query.limit(i64::try_from(limit).unwrap_or(i64::MAX));
                }

                let ids: Vec<uuid::Uuid> = query.load(conn)?;
                Ok(ids)
            })
            .await?;

        tracing::debug!(count = ids.len(), "Loaded candidate ids");
        Ok(ids.into_iter().map(MediaId::from).collect())
    }

    #[tracing::instrument(skip(self, ids), fields(count = ids.len()))]
    async fn fetch_by_ids(&self, ids: &[MediaId]) -> MediafillResult<Vec<MediaRecord>> {
        let uuids: Vec<uuid::Uuid> = ids.iter().map(|id| *id.as_uuid()).collect();

        let rows = self
            .with_connection(move |conn| {
                let rows: Vec<MediaRecordRow> = media_records::table
                    .filter(media_records::id.eq_any(uuids))
                    .select(MediaRecordRow::as_select())
                    .load(conn)?;
                Ok(rows)
            })
            .await?;

        let records = rows
            .into_iter()
            .filter_map(|row| {
                let id = row.id;
                match MediaRecord::try_from(row) {
                    Ok(record) => Some(record),
                    Err(e) => {
                        tracing::warn!(id = %id, error = %e, "Skipping malformed catalog row");
                        None
                    }
                }
            })
            .collect();

        Ok(records)
    }
}
