use log::{error, info};
use std::fs;
use std::path::Path;
use std::sync::Arc;

use diesel::connection::SimpleConnection;
use diesel::r2d2::{self, ConnectionManager};
use diesel::sqlite::SqliteConnection;
use diesel::Connection;
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};

use crate::errors::StorageError;
use visadesk_core::constants::DATABASE_FILE_NAME;
use visadesk_core::errors::{DatabaseError, Error, Result};

// The database-agnostic connection types live in core so services can be
// written against them; re-export here for storage callers.
pub use visadesk_core::db::{DbConnection, DbPool, DbTransactionExecutor};

pub mod write_actor;
pub use write_actor::{spawn_writer, WriteHandle};

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!();

/// Prepares the database file under `app_data_dir` and returns its path.
///
/// Creates the parent directory on first use and applies the connection
/// PRAGMAs (WAL journal, foreign keys, busy timeout) once up front.
pub fn init(app_data_dir: &str) -> Result<String> {
    let db_path = get_db_path(app_data_dir);

    // DATABASE_URL may point anywhere, so make sure the parent directory exists.
    if let Some(db_dir) = Path::new(&db_path).parent() {
        if !db_dir.as_os_str().is_empty() && !db_dir.exists() {
            fs::create_dir_all(db_dir).map_err(|e| {
                Error::Database(DatabaseError::ConnectionFailed(format!(
                    "Failed to create database directory: {}",
                    e
                )))
            })?;
        }
    }

    {
        let mut conn = SqliteConnection::establish(&db_path).map_err(StorageError::from)?;
        conn.batch_execute(
            "
            PRAGMA journal_mode = WAL;
            PRAGMA foreign_keys = ON;
            PRAGMA busy_timeout = 30000;
            PRAGMA synchronous = NORMAL;
            ",
        )
        .map_err(StorageError::from)?;
    }

    Ok(db_path)
}

/// Creates an r2d2 connection pool for the given database path.
pub fn create_pool(db_path: &str) -> Result<Arc<DbPool>> {
    let manager = ConnectionManager::<SqliteConnection>::new(db_path);
    let pool = r2d2::Pool::builder()
        .max_size(8)
        .min_idle(Some(1))
        .connection_timeout(std::time::Duration::from_secs(30))
        .connection_customizer(Box::new(ConnectionCustomizer {}))
        .build(manager)
        .map_err(StorageError::from)?;
    Ok(Arc::new(pool))
}

/// Runs any pending embedded migrations.
pub fn run_migrations(pool: &DbPool) -> Result<()> {
    let mut connection = get_connection(pool)?;

    info!("Checking for pending database migrations...");
    let applied = connection.run_pending_migrations(MIGRATIONS).map_err(|e| {
        error!("Database migration failed: {}", e);
        StorageError::MigrationFailed(e.to_string())
    })?;

    if applied.is_empty() {
        info!("Database schema is up to date");
    } else {
        for version in applied {
            info!("Applied migration: {}", version);
        }
    }

    Ok(())
}

/// Resolves the database file path.
///
/// The `DATABASE_URL` environment variable takes precedence; otherwise the
/// database lives at `<app_data_dir>/visadesk.db`.
pub fn get_db_path(app_data_dir: &str) -> String {
    match std::env::var("DATABASE_URL") {
        Ok(url) => url,
        Err(_) => Path::new(app_data_dir)
            .join(DATABASE_FILE_NAME)
            .to_string_lossy()
            .to_string(),
    }
}

/// Checks out a connection from the pool.
pub fn get_connection(pool: &DbPool) -> Result<DbConnection> {
    pool.get().map_err(|e| StorageError::from(e).into())
}

/// Applies per-connection PRAGMAs to every pooled connection.
#[derive(Debug)]
struct ConnectionCustomizer {}

impl r2d2::CustomizeConnection<SqliteConnection, diesel::r2d2::Error> for ConnectionCustomizer {
    fn on_acquire(&self, conn: &mut SqliteConnection) -> std::result::Result<(), diesel::r2d2::Error> {
        conn.batch_execute(
            "
            PRAGMA foreign_keys = ON;
            PRAGMA busy_timeout = 30000;
            PRAGMA synchronous = NORMAL;
            ",
        )
        .map_err(diesel::r2d2::Error::QueryError)
    }
}
