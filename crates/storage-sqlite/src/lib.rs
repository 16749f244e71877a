//! SQLite storage implementation for Visadesk.
//!
//! This crate provides the concrete persistence layer: the Diesel schema and
//! embedded migrations, one repository per collection, a single-writer actor
//! that serializes every mutation, and [`StoreContext`], which wires the
//! repositories into the services defined in `visadesk_core`.

pub mod context;
pub mod db;
pub mod errors;
pub mod schema;
mod utils;

// Repository implementations
pub mod customers;
pub mod invoices;
pub mod payments;

// Re-export database utilities
pub use db::{
    create_pool, get_connection, get_db_path, init, run_migrations, spawn_writer, DbConnection,
    DbPool, DbTransactionExecutor, WriteHandle,
};

// Re-export the assembled store
pub use context::StoreContext;

// Re-export storage errors
pub use errors::StorageError;

// Re-export shared error types from core for convenience
pub use visadesk_core::errors::{DatabaseError, Error, Result};
