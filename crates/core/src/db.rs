//! Database abstractions shared between the core services and the storage layer.
//!
//! The concrete pool construction and migrations live in the storage crate;
//! this module only defines the connection aliases and the transaction seam
//! that services use to compose multi-step writes atomically.

use std::sync::Arc;

use diesel::connection::Connection;
use diesel::r2d2::{ConnectionManager, Pool, PooledConnection};
use diesel::sqlite::SqliteConnection;

use crate::errors::{DatabaseError, Error, Result};

pub type DbPool = Pool<ConnectionManager<SqliteConnection>>;
pub type DbConnection = PooledConnection<ConnectionManager<SqliteConnection>>;

/// Trait for executing database transactions
pub trait DbTransactionExecutor {
    /// Execute operations within a transaction and return the result
    fn execute<F, T, E>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&mut DbConnection) -> std::result::Result<T, E>,
        E: Into<Error>;
}

/// Implementation of DbTransactionExecutor for DbPool
impl DbTransactionExecutor for DbPool {
    fn execute<F, T, E>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&mut DbConnection) -> std::result::Result<T, E>,
        E: Into<Error>,
    {
        let mut conn = self
            .get()
            .map_err(|e| Error::Database(DatabaseError::ConnectionFailed(e.to_string())))?;

        // The closure's error is stashed aside so callers see the original
        // failure (e.g. a rejected workflow transition) rather than a generic
        // rollback error.
        let mut failure: Option<Error> = None;
        let result = conn.transaction::<T, diesel::result::Error, _>(|tx_conn| {
            f(tx_conn).map_err(|e| {
                failure = Some(e.into());
                diesel::result::Error::RollbackTransaction
            })
        });

        result.map_err(|e| match failure.take() {
            Some(inner) => inner,
            None => Error::Database(DatabaseError::TransactionFailed(e.to_string())),
        })
    }
}

/// Implementation of DbTransactionExecutor for Arc<DbPool>
impl DbTransactionExecutor for Arc<DbPool> {
    fn execute<F, T, E>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&mut DbConnection) -> std::result::Result<T, E>,
        E: Into<Error>,
    {
        (**self).execute(f)
    }
}
