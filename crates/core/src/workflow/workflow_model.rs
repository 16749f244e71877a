//! Input models for workflow transitions.
//!
//! Drafts carry only what the caller decides; the workflow fills in the
//! tracking code, status and timestamps from the customer record it loads.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Invoice details supplied when issuing an invoice for a customer.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceDraft {
    pub amount: Decimal,
    pub currency: String,
    pub description: String,
}

/// Payment details supplied when recording a payment for a customer.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentDraft {
    /// Invoice being settled; defaults to the customer's current invoice
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invoice_id: Option<String>,
    pub amount: Decimal,
    pub payment_method: String,
    /// Moment of payment; defaults to now
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_date: Option<DateTime<Utc>>,
    pub notes: Option<String>,
}
