//! Customers module - domain models, services, and traits.

mod customers_model;
mod customers_service;
mod customers_traits;
mod tracking_code;

#[cfg(test)]
mod customers_service_tests;

// Re-export the public interface
pub use customers_model::{Customer, CustomerStatus, CustomerStatusSummary, NewCustomer};
pub use customers_service::CustomerService;
pub use customers_traits::{CustomerRepositoryTrait, CustomerServiceTrait};
pub use tracking_code::{generate_tracking_code, is_valid_tracking_code};
