//! Assembled store wiring the SQLite repositories into the core services.

use std::sync::Arc;

use log::info;

use visadesk_core::customers::{CustomerService, CustomerServiceTrait};
use visadesk_core::invoices::{InvoiceService, InvoiceServiceTrait};
use visadesk_core::payments::{PaymentService, PaymentServiceTrait};
use visadesk_core::workflow::{WorkflowService, WorkflowServiceTrait};
use visadesk_core::Result;

use crate::customers::CustomerRepository;
use crate::db;
use crate::invoices::InvoiceRepository;
use crate::payments::PaymentRepository;

/// One handle to the local store: the collection services and the workflow
/// service, wired over a single SQLite database and its write actor.
#[derive(Clone)]
pub struct StoreContext {
    customer_service: Arc<dyn CustomerServiceTrait>,
    invoice_service: Arc<dyn InvoiceServiceTrait>,
    payment_service: Arc<dyn PaymentServiceTrait>,
    workflow_service: Arc<dyn WorkflowServiceTrait>,
}

impl StoreContext {
    /// Opens the database under `app_data_dir` (creating it on first use),
    /// applies pending migrations and wires up the services.
    ///
    /// Must be called from within a Tokio runtime; the write actor is
    /// spawned onto it.
    pub fn init(app_data_dir: &str) -> Result<Self> {
        info!("Initializing store context in '{}'", app_data_dir);

        let db_path = db::init(app_data_dir)?;
        let pool = db::create_pool(&db_path)?;
        let writer = db::spawn_writer((*pool).clone());
        db::run_migrations(&pool)?;

        let customer_repository =
            Arc::new(CustomerRepository::new(Arc::clone(&pool), writer.clone()));
        let invoice_repository =
            Arc::new(InvoiceRepository::new(Arc::clone(&pool), writer.clone()));
        let payment_repository = Arc::new(PaymentRepository::new(Arc::clone(&pool), writer));

        let workflow_service = Arc::new(WorkflowService::new(
            customer_repository.clone(),
            invoice_repository.clone(),
            payment_repository.clone(),
            Arc::clone(&pool),
        ));

        Ok(Self {
            customer_service: Arc::new(CustomerService::new(customer_repository)),
            invoice_service: Arc::new(InvoiceService::new(invoice_repository)),
            payment_service: Arc::new(PaymentService::new(payment_repository)),
            workflow_service,
        })
    }

    pub fn customer_service(&self) -> Arc<dyn CustomerServiceTrait> {
        Arc::clone(&self.customer_service)
    }

    pub fn invoice_service(&self) -> Arc<dyn InvoiceServiceTrait> {
        Arc::clone(&self.invoice_service)
    }

    pub fn payment_service(&self) -> Arc<dyn PaymentServiceTrait> {
        Arc::clone(&self.payment_service)
    }

    pub fn workflow_service(&self) -> Arc<dyn WorkflowServiceTrait> {
        Arc::clone(&self.workflow_service)
    }
}

// ================================
// Tests
// ================================
