use log::debug;
use std::sync::Arc;

use super::payments_model::{NewPayment, PaymentRecord};
use super::payments_traits::{PaymentRepositoryTrait, PaymentServiceTrait};
use crate::errors::Result;

/// Service for managing payments
pub struct PaymentService {
    repository: Arc<dyn PaymentRepositoryTrait>,
}

impl PaymentService {
    /// Creates a new PaymentService instance
    pub fn new(repository: Arc<dyn PaymentRepositoryTrait>) -> Self {
        Self { repository }
    }
}

#[async_trait::async_trait]
impl PaymentServiceTrait for PaymentService {
    async fn add_payment(&self, new_payment: NewPayment) -> Result<PaymentRecord> {
        debug!(
            "Recording payment for tracking code '{}'",
            new_payment.tracking_code
        );
        (*self.repository).create(new_payment).await
    }

    fn get_payments_by_tracking_code(&self, tracking_code: &str) -> Result<Vec<PaymentRecord>> {
        (*self.repository).list_by_tracking_code(tracking_code)
    }
}
