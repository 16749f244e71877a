use log::debug;
use std::sync::Arc;

use super::customers_model::{Customer, CustomerStatus, CustomerStatusSummary, NewCustomer};
use super::customers_traits::{CustomerRepositoryTrait, CustomerServiceTrait};
use crate::errors::Result;

/// Service for managing customer files
pub struct CustomerService {
    repository: Arc<dyn CustomerRepositoryTrait>,
}

impl CustomerService {
    /// Creates a new CustomerService instance
    pub fn new(repository: Arc<dyn CustomerRepositoryTrait>) -> Self {
        Self { repository }
    }
}

#[async_trait::async_trait]
impl CustomerServiceTrait for CustomerService {
    /// Registers a new customer file
    async fn register_customer(&self, new_customer: NewCustomer) -> Result<Customer> {
        debug!("Registering customer '{}'", new_customer.full_name);
        (*self.repository).create(new_customer).await
    }

    /// Replaces an existing customer record
    async fn update_customer(&self, customer: Customer) -> Result<Customer> {
        (*self.repository).update(customer).await
    }

    /// Looks up a customer by tracking code
    fn get_customer_by_tracking_code(&self, tracking_code: &str) -> Result<Option<Customer>> {
        (*self.repository).find_by_tracking_code(tracking_code)
    }

    /// Lists all customers
    fn get_all_customers(&self) -> Result<Vec<Customer>> {
        (*self.repository).list()
    }

    /// Lists customers with an appointment on file that is still being worked
    fn get_customers_with_appointments(&self) -> Result<Vec<Customer>> {
        let customers = self.get_all_customers()?;
        Ok(customers
            .into_iter()
            .filter(|c| c.appointment_date.is_some() && c.status != CustomerStatus::Paid)
            .collect())
    }

    /// Lists up to `limit` customers with appointments, earliest first
    fn get_upcoming_appointments(&self, limit: usize) -> Result<Vec<Customer>> {
        let mut upcoming: Vec<Customer> = self
            .get_all_customers()?
            .into_iter()
            .filter(|c| c.appointment_date.is_some())
            .collect();
        upcoming.sort_by(|a, b| {
            (a.appointment_date, a.appointment_time.as_deref())
                .cmp(&(b.appointment_date, b.appointment_time.as_deref()))
        });
        upcoming.truncate(limit);
        Ok(upcoming)
    }

    /// Counts customer files by status
    fn get_status_summary(&self) -> Result<CustomerStatusSummary> {
        let mut summary = CustomerStatusSummary::default();
        for customer in self.get_all_customers()? {
            summary.total += 1;
            match customer.status {
                CustomerStatus::Registered => summary.registered += 1,
                CustomerStatus::AppointmentScheduled => summary.scheduled += 1,
                CustomerStatus::Invoiced => summary.invoiced += 1,
                CustomerStatus::Paid => summary.paid += 1,
            }
        }
        Ok(summary)
    }
}
