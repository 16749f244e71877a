//! Customer repository and service traits.
//!
//! These traits define the contract for customer operations without any
//! database-specific types, allowing for different storage implementations.

use async_trait::async_trait;
use diesel::sqlite::SqliteConnection;

use super::customers_model::{Customer, CustomerStatusSummary, NewCustomer};
use crate::errors::Result;

/// Trait defining the contract for Customer repository operations.
///
/// Implementations of this trait handle the persistence of customer data.
/// The `*_in_transaction` variants run against a caller-supplied connection
/// so that workflow transitions can compose several writes atomically.
#[async_trait]
pub trait CustomerRepositoryTrait: Send + Sync {
    /// Creates a new customer, assigning id, tracking code, status and
    /// creation timestamp where the input leaves them out.
    ///
    /// The implementation handles transaction management internally.
    async fn create(&self, new_customer: NewCustomer) -> Result<Customer>;

    /// Replaces an existing customer record, keyed by its id.
    ///
    /// Fails with a not-found error when no record with that id exists.
    async fn update(&self, customer: Customer) -> Result<Customer>;

    /// Retrieves a customer by tracking code, or `None` when absent.
    fn find_by_tracking_code(&self, tracking_code: &str) -> Result<Option<Customer>>;

    /// Lists every customer on file.
    fn list(&self) -> Result<Vec<Customer>>;

    /// Transaction-scoped variant of [`find_by_tracking_code`](Self::find_by_tracking_code).
    fn find_by_tracking_code_in_transaction(
        &self,
        tracking_code: &str,
        conn: &mut SqliteConnection,
    ) -> Result<Option<Customer>>;

    /// Transaction-scoped variant of [`update`](Self::update).
    fn update_in_transaction(
        &self,
        customer: Customer,
        conn: &mut SqliteConnection,
    ) -> Result<Customer>;
}

/// Trait defining the contract for Customer service operations.
///
/// The service layer handles business logic and coordinates between
/// repositories and other services.
#[async_trait]
pub trait CustomerServiceTrait: Send + Sync {
    /// Registers a new customer with business validation.
    async fn register_customer(&self, new_customer: NewCustomer) -> Result<Customer>;

    /// Replaces an existing customer record.
    async fn update_customer(&self, customer: Customer) -> Result<Customer>;

    /// Looks up a customer by tracking code.
    fn get_customer_by_tracking_code(&self, tracking_code: &str) -> Result<Option<Customer>>;

    /// Gets all customers on file.
    fn get_all_customers(&self) -> Result<Vec<Customer>>;

    /// Gets customers holding an appointment that is still being worked,
    /// i.e. an appointment date is set and the file is not paid.
    fn get_customers_with_appointments(&self) -> Result<Vec<Customer>>;

    /// Gets up to `limit` customers with appointments, earliest first.
    fn get_upcoming_appointments(&self, limit: usize) -> Result<Vec<Customer>>;

    /// Counts customer files by status.
    fn get_status_summary(&self) -> Result<CustomerStatusSummary>;
}
