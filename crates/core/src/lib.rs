//! Visadesk Core - Domain entities, services, and traits.
//!
//! This crate contains the core business logic for Visadesk, a local
//! record-keeping layer for a visa appointment service: customer files,
//! their invoices and payments, and the workflow that moves a file from
//! registration through to payment.
//!
//! It is database-agnostic and defines traits that are implemented
//! by the `storage-sqlite` crate.

pub mod constants;
pub mod customers;
pub mod db;
pub mod errors;
pub mod invoices;
pub mod payments;
pub mod workflow;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
