//! SQLite storage implementation for invoices.

mod model;
mod repository;

pub use model::InvoiceDB;
pub use repository::InvoiceRepository;
