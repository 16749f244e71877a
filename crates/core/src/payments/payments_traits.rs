//! Payment repository and service traits.

use async_trait::async_trait;
use diesel::sqlite::SqliteConnection;

use super::payments_model::{NewPayment, PaymentRecord};
use crate::errors::Result;

/// Trait defining the contract for Payment repository operations.
#[async_trait]
pub trait PaymentRepositoryTrait: Send + Sync {
    /// Records a new payment, assigning an id where the input leaves it out.
    async fn create(&self, new_payment: NewPayment) -> Result<PaymentRecord>;

    /// Transaction-scoped variant of [`create`](Self::create), used by
    /// workflow transitions that also touch the customer record.
    fn create_in_transaction(
        &self,
        new_payment: NewPayment,
        conn: &mut SqliteConnection,
    ) -> Result<PaymentRecord>;

    /// Lists all payments recorded for a tracking code.
    fn list_by_tracking_code(&self, tracking_code: &str) -> Result<Vec<PaymentRecord>>;
}

/// Trait defining the contract for Payment service operations.
#[async_trait]
pub trait PaymentServiceTrait: Send + Sync {
    /// Records a payment with business validation.
    async fn add_payment(&self, new_payment: NewPayment) -> Result<PaymentRecord>;

    /// Gets all payments recorded for a tracking code.
    fn get_payments_by_tracking_code(&self, tracking_code: &str) -> Result<Vec<PaymentRecord>>;
}
