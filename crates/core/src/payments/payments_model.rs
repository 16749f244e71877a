//! Payment domain models.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{errors::ValidationError, Error, Result};

/// Domain model representing a recorded payment.
///
/// Like invoices, payments reference their customer by tracking code; the
/// `invoice_id` points at the invoice the payment settles.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentRecord {
    pub id: String,
    pub tracking_code: String,
    pub invoice_id: String,
    pub amount: Decimal,
    pub payment_method: String,
    pub payment_date: DateTime<Utc>,
    pub notes: Option<String>,
}

/// Input model for recording a payment.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPayment {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub tracking_code: String,
    pub invoice_id: String,
    pub amount: Decimal,
    pub payment_method: String,
    pub payment_date: DateTime<Utc>,
    pub notes: Option<String>,
}

impl NewPayment {
    /// Validates the new payment data.
    pub fn validate(&self) -> Result<()> {
        if self.tracking_code.trim().is_empty() {
            return Err(Error::Validation(ValidationError::MissingField(
                "trackingCode".to_string(),
            )));
        }
        if self.invoice_id.trim().is_empty() {
            return Err(Error::Validation(ValidationError::MissingField(
                "invoiceId".to_string(),
            )));
        }
        if self.amount <= Decimal::ZERO {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Payment amount must be greater than zero".to_string(),
            )));
        }
        if self.payment_method.trim().is_empty() {
            return Err(Error::Validation(ValidationError::MissingField(
                "paymentMethod".to_string(),
            )));
        }
        Ok(())
    }
}
