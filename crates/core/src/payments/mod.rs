//! Payments module - domain models, services, and traits.

mod payments_model;
mod payments_service;
mod payments_traits;

// Re-export the public interface
pub use payments_model::{NewPayment, PaymentRecord};
pub use payments_service::PaymentService;
pub use payments_traits::{PaymentRepositoryTrait, PaymentServiceTrait};
