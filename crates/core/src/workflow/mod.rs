//! Workflow module - typed status transitions for customer files.
//!
//! The collections themselves accept any well-formed record; the rules for
//! how a file moves between statuses live here, behind
//! [`WorkflowServiceTrait`], so callers cannot skip a step by accident.

mod workflow_errors;
mod workflow_model;
mod workflow_service;
mod workflow_traits;

// Re-export the public interface
pub use workflow_errors::WorkflowError;
pub use workflow_model::{InvoiceDraft, PaymentDraft};
pub use workflow_service::WorkflowService;
pub use workflow_traits::WorkflowServiceTrait;
