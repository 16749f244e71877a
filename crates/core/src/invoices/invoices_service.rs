use log::debug;
use std::sync::Arc;

use super::invoices_model::{Invoice, NewInvoice};
use super::invoices_traits::{InvoiceRepositoryTrait, InvoiceServiceTrait};
use crate::errors::Result;

/// Service for managing invoices
pub struct InvoiceService {
    repository: Arc<dyn InvoiceRepositoryTrait>,
}

impl InvoiceService {
    /// Creates a new InvoiceService instance
    pub fn new(repository: Arc<dyn InvoiceRepositoryTrait>) -> Self {
        Self { repository }
    }
}

#[async_trait::async_trait]
impl InvoiceServiceTrait for InvoiceService {
    async fn add_invoice(&self, new_invoice: NewInvoice) -> Result<Invoice> {
        debug!(
            "Adding invoice for tracking code '{}'",
            new_invoice.tracking_code
        );
        (*self.repository).create(new_invoice).await
    }

    fn get_invoices_by_tracking_code(&self, tracking_code: &str) -> Result<Vec<Invoice>> {
        (*self.repository).list_by_tracking_code(tracking_code)
    }
}
