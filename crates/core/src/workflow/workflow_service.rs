use log::debug;
use std::sync::Arc;

use chrono::{NaiveDate, Utc};
use diesel::sqlite::SqliteConnection;

use super::workflow_errors::WorkflowError;
use super::workflow_model::{InvoiceDraft, PaymentDraft};
use super::workflow_traits::WorkflowServiceTrait;
use crate::customers::{Customer, CustomerRepositoryTrait, CustomerStatus};
use crate::db::DbTransactionExecutor;
use crate::errors::{DatabaseError, Error, Result, ValidationError};
use crate::invoices::{Invoice, InvoiceRepositoryTrait, InvoiceStatus, NewInvoice};
use crate::payments::{NewPayment, PaymentRecord, PaymentRepositoryTrait};

/// Service driving customer files through their status transitions
/// (Generic over Executor)
///
/// Every transition loads the customer inside a transaction, checks the
/// status precondition there, and commits the record writes together, so a
/// file can never end up e.g. `paid` without its payment row.
pub struct WorkflowService<E: DbTransactionExecutor + Send + Sync + Clone> {
    customer_repository: Arc<dyn CustomerRepositoryTrait>,
    invoice_repository: Arc<dyn InvoiceRepositoryTrait>,
    payment_repository: Arc<dyn PaymentRepositoryTrait>,
    transaction_executor: E,
}

impl<E: DbTransactionExecutor + Send + Sync + Clone> WorkflowService<E> {
    /// Creates a new WorkflowService instance
    pub fn new(
        customer_repository: Arc<dyn CustomerRepositoryTrait>,
        invoice_repository: Arc<dyn InvoiceRepositoryTrait>,
        payment_repository: Arc<dyn PaymentRepositoryTrait>,
        transaction_executor: E,
    ) -> Self {
        Self {
            customer_repository,
            invoice_repository,
            payment_repository,
            transaction_executor,
        }
    }
}

fn load_customer(
    repository: &dyn CustomerRepositoryTrait,
    tracking_code: &str,
    conn: &mut SqliteConnection,
) -> Result<Customer> {
    repository
        .find_by_tracking_code_in_transaction(tracking_code, conn)?
        .ok_or_else(|| {
            Error::Database(DatabaseError::NotFound(format!(
                "No customer with tracking code '{}'",
                tracking_code
            )))
        })
}

#[async_trait::async_trait]
impl<E: DbTransactionExecutor + Send + Sync + Clone> WorkflowServiceTrait for WorkflowService<E> {
    async fn schedule_appointment(
        &self,
        tracking_code: &str,
        appointment_date: NaiveDate,
        appointment_time: String,
    ) -> Result<Customer> {
        if appointment_time.trim().is_empty() {
            return Err(Error::Validation(ValidationError::MissingField(
                "appointmentTime".to_string(),
            )));
        }
        debug!(
            "Scheduling appointment for '{}' on {}",
            tracking_code, appointment_date
        );

        // Clones for the transaction closure
        let code = tracking_code.to_string();
        let repository = self.customer_repository.clone();
        let executor = self.transaction_executor.clone();

        executor.execute(move |tx_conn| {
            let mut customer = load_customer(repository.as_ref(), &code, tx_conn)?;
            if !customer.status.can_schedule() {
                return Err(Error::Workflow(WorkflowError::InvalidTransition {
                    action: "schedule an appointment",
                    status: customer.status,
                }));
            }
            customer.status = CustomerStatus::AppointmentScheduled;
            customer.appointment_date = Some(appointment_date);
            customer.appointment_time = Some(appointment_time);
            repository.update_in_transaction(customer, tx_conn)
        })
    }

    async fn issue_invoice(&self, tracking_code: &str, draft: InvoiceDraft) -> Result<Invoice> {
        debug!("Issuing invoice for '{}'", tracking_code);

        let code = tracking_code.to_string();
        let customers = self.customer_repository.clone();
        let invoices = self.invoice_repository.clone();
        let executor = self.transaction_executor.clone();

        executor.execute(move |tx_conn| {
            let mut customer = load_customer(customers.as_ref(), &code, tx_conn)?;
            if !customer.status.can_invoice() {
                return Err(Error::Workflow(WorkflowError::InvalidTransition {
                    action: "issue an invoice",
                    status: customer.status,
                }));
            }
            let new_invoice = NewInvoice {
                id: None,
                tracking_code: customer.tracking_code.clone(),
                amount: draft.amount,
                currency: draft.currency,
                description: draft.description,
                status: InvoiceStatus::Issued,
            };
            let invoice = invoices.create_in_transaction(new_invoice, tx_conn)?;
            customer.status = CustomerStatus::Invoiced;
            customer.invoice_id = Some(invoice.id.clone());
            customers.update_in_transaction(customer, tx_conn)?;
            Ok(invoice)
        })
    }

    async fn record_payment(
        &self,
        tracking_code: &str,
        draft: PaymentDraft,
    ) -> Result<PaymentRecord> {
        debug!("Recording payment for '{}'", tracking_code);

        let code = tracking_code.to_string();
        let customers = self.customer_repository.clone();
        let payments = self.payment_repository.clone();
        let executor = self.transaction_executor.clone();

        executor.execute(move |tx_conn| {
            let mut customer = load_customer(customers.as_ref(), &code, tx_conn)?;
            if !customer.status.can_record_payment() {
                return Err(Error::Workflow(WorkflowError::InvalidTransition {
                    action: "record a payment",
                    status: customer.status,
                }));
            }
            let invoice_id = draft
                .invoice_id
                .or_else(|| customer.invoice_id.clone())
                .ok_or_else(|| Error::Workflow(WorkflowError::MissingInvoice(code.clone())))?;
            let new_payment = NewPayment {
                id: None,
                tracking_code: customer.tracking_code.clone(),
                invoice_id,
                amount: draft.amount,
                payment_method: draft.payment_method,
                payment_date: draft.payment_date.unwrap_or_else(Utc::now),
                notes: draft.notes,
            };
            let payment = payments.create_in_transaction(new_payment, tx_conn)?;
            customer.status = CustomerStatus::Paid;
            customers.update_in_transaction(customer, tx_conn)?;
            Ok(payment)
        })
    }
}
