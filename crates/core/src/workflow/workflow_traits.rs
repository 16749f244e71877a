//! Workflow service trait.

use async_trait::async_trait;
use chrono::NaiveDate;

use super::workflow_model::{InvoiceDraft, PaymentDraft};
use crate::customers::Customer;
use crate::errors::Result;
use crate::invoices::Invoice;
use crate::payments::PaymentRecord;

/// Trait defining the typed status transitions of a customer file.
///
/// Each transition checks the customer's current status, rejects requests
/// that arrive out of order, and applies its record writes atomically.
#[async_trait]
pub trait WorkflowServiceTrait: Send + Sync {
    /// Books (or rebooks) an appointment and moves the file to
    /// `appointment-scheduled`.
    ///
    /// Allowed while the file is `registered` or already
    /// `appointment-scheduled`.
    async fn schedule_appointment(
        &self,
        tracking_code: &str,
        appointment_date: NaiveDate,
        appointment_time: String,
    ) -> Result<Customer>;

    /// Issues an invoice, points the customer at it and moves the file to
    /// `invoiced`.
    ///
    /// Allowed any time before the file is `paid`; reissuing while already
    /// `invoiced` repoints the customer at the newest invoice.
    async fn issue_invoice(&self, tracking_code: &str, draft: InvoiceDraft) -> Result<Invoice>;

    /// Records a payment against the customer's invoice and moves the file
    /// to `paid`.
    ///
    /// Allowed only while the file is `invoiced`. `paid` is terminal.
    async fn record_payment(&self, tracking_code: &str, draft: PaymentDraft)
        -> Result<PaymentRecord>;
}
