//! Blocking operation helpers for the `PostgreSQL` repositories.
//!
//! Diesel is synchronous, so every query runs on the blocking thread pool
//! with a connection checked out of the shared r2d2 pool.

use diesel::PgConnection;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::result::{DatabaseErrorKind, Error as DieselError};

use crate::ports::{RepositoryError, RepositoryResult};

/// `PostgreSQL` connection pool type shared by the board repositories.
pub type PgPool = Pool<ConnectionManager<PgConnection>>;

/// Runs `f` with a pooled connection on the blocking thread pool.
pub(super) async fn run_blocking<F, T>(pool: &PgPool, f: F) -> RepositoryResult<T>
where
    F: FnOnce(&mut PgConnection) -> RepositoryResult<T> + Send + 'static,
    T: Send + 'static,
{
    let pool_handle = pool.clone();
    tokio::task::spawn_blocking(move || {
        let mut connection = pool_handle.get().map_err(RepositoryError::persistence)?;
        f(&mut connection)
    })
    .await
    .map_err(RepositoryError::persistence)?
}

/// Returns the database error kind and constraint name, if `err` is a
/// constraint violation reported by the server.
pub(super) fn violated_constraint(err: &DieselError) -> Option<(&DatabaseErrorKind, &str)> {
    match err {
        DieselError::DatabaseError(
            kind @ (DatabaseErrorKind::UniqueViolation | DatabaseErrorKind::ForeignKeyViolation),
            info,
        ) => Some((kind, info.constraint_name().unwrap_or_default())),
        _ => None,
    }
}
