//! Database connection utilities.

use crate::DatabaseResult;
use mediafill_error::{DatabaseError, DatabaseErrorKind};
use diesel::pg::PgConnection;
use diesel::r2d2::{ConnectionManager, Pool};

/// Pooled PostgreSQL connections.
pub type PgPool = Pool<ConnectionManager<PgConnection>>;

/// Read the `DATABASE_URL` environment variable.
///
/// # Errors
///
/// Returns an error if the variable is not set.
pub fn database_url() -> DatabaseResult<String> {
    std::env::var("DATABASE_URL").map_err(|_| {
        DatabaseError::new(DatabaseErrorKind::Connection(
            "DATABASE_URL environment variable not set".to_string(),
        ))
    })
}

/// Build a connection pool for the given database URL.
///
/// The pool checks out one connection eagerly, so an unreachable database is
/// reported here rather than on the first query.
///
/// # Errors
///
/// Returns an error if the pool cannot open its initial connection.
#[tracing::instrument(skip(database_url))]
pub fn create_pool(database_url: &str) -> DatabaseResult<PgPool> {
    let manager = ConnectionManager::<PgConnection>::new(database_url);
    let pool = Pool::builder()
        .build(manager)
        .map_err(|e| DatabaseError::new(DatabaseErrorKind::Connection(e.to_string())))?;
    tracing::debug!(max_size = pool.max_size(), "Created database pool");
    Ok(pool)
}
