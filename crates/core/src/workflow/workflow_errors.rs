//! Workflow-specific error types.

use thiserror::Error;

use crate::customers::CustomerStatus;

/// Errors raised when a status transition is requested out of order.
#[derive(Error, Debug)]
pub enum WorkflowError {
    /// The customer's current status does not allow the requested action.
    #[error("cannot {action} while the customer status is '{status}'")]
    InvalidTransition {
        action: &'static str,
        status: CustomerStatus,
    },

    /// A payment was requested but no invoice reference could be resolved.
    #[error("customer '{0}' has no invoice to record a payment against")]
    MissingInvoice(String),
}
