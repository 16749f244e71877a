//! Invoice repository and service traits.

use async_trait::async_trait;
use diesel::sqlite::SqliteConnection;

use super::invoices_model::{Invoice, NewInvoice};
use crate::errors::Result;

/// Trait defining the contract for Invoice repository operations.
#[async_trait]
pub trait InvoiceRepositoryTrait: Send + Sync {
    /// Creates a new invoice, assigning id and creation timestamp where the
    /// input leaves them out.
    async fn create(&self, new_invoice: NewInvoice) -> Result<Invoice>;

    /// Transaction-scoped variant of [`create`](Self::create), used by
    /// workflow transitions that also touch the customer record.
    fn create_in_transaction(
        &self,
        new_invoice: NewInvoice,
        conn: &mut SqliteConnection,
    ) -> Result<Invoice>;

    /// Lists all invoices recorded for a tracking code.
    fn list_by_tracking_code(&self, tracking_code: &str) -> Result<Vec<Invoice>>;
}

/// Trait defining the contract for Invoice service operations.
#[async_trait]
pub trait InvoiceServiceTrait: Send + Sync {
    /// Adds an invoice with business validation.
    async fn add_invoice(&self, new_invoice: NewInvoice) -> Result<Invoice>;

    /// Gets all invoices recorded for a tracking code.
    fn get_invoices_by_tracking_code(&self, tracking_code: &str) -> Result<Vec<Invoice>>;
}
