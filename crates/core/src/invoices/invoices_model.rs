//! Invoice domain models.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{errors::ValidationError, Error, Result};

/// Status of an issued invoice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum InvoiceStatus {
    Draft,
    #[default]
    Issued,
    Paid,
}

impl InvoiceStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            InvoiceStatus::Draft => "draft",
            InvoiceStatus::Issued => "issued",
            InvoiceStatus::Paid => "paid",
        }
    }
}

impl fmt::Display for InvoiceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for InvoiceStatus {
    type Err = ValidationError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "draft" => Ok(InvoiceStatus::Draft),
            "issued" => Ok(InvoiceStatus::Issued),
            "paid" => Ok(InvoiceStatus::Paid),
            other => Err(ValidationError::InvalidInput(format!(
                "Unknown invoice status '{}'",
                other
            ))),
        }
    }
}

/// Domain model representing an invoice.
///
/// Invoices reference their customer by tracking code rather than by id, so
/// a customer's billing history can be pulled with the code alone.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Invoice {
    pub id: String,
    pub tracking_code: String,
    pub amount: Decimal,
    pub currency: String,
    pub description: String,
    pub status: InvoiceStatus,
    pub created_at: DateTime<Utc>,
}

/// Input model for adding a new invoice.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewInvoice {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub tracking_code: String,
    pub amount: Decimal,
    pub currency: String,
    pub description: String,
    #[serde(default)]
    pub status: InvoiceStatus,
}

impl NewInvoice {
    /// Validates the new invoice data.
    pub fn validate(&self) -> Result<()> {
        if self.tracking_code.trim().is_empty() {
            return Err(Error::Validation(ValidationError::MissingField(
                "trackingCode".to_string(),
            )));
        }
        if self.amount <= Decimal::ZERO {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Invoice amount must be greater than zero".to_string(),
            )));
        }
        if self.currency.trim().is_empty() {
            return Err(Error::Validation(ValidationError::MissingField(
                "currency".to_string(),
            )));
        }
        if self.description.trim().is_empty() {
            return Err(Error::Validation(ValidationError::MissingField(
                "description".to_string(),
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn sample_invoice() -> NewInvoice {
        NewInvoice {
            id: None,
            tracking_code: "ABC12345".to_string(),
            amount: dec!(150.00),
            currency: "USD".to_string(),
            description: "Tourist visa processing fee".to_string(),
            status: InvoiceStatus::Issued,
        }
    }

    #[test]
    fn test_validate_accepts_complete_invoice() {
        assert!(sample_invoice().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_non_positive_amount() {
        let mut invoice = sample_invoice();
        invoice.amount = Decimal::ZERO;
        assert!(invoice.validate().is_err());

        invoice.amount = dec!(-5);
        assert!(invoice.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_blank_fields() {
        let mut invoice = sample_invoice();
        invoice.description = "  ".to_string();
        assert!(invoice.validate().is_err());

        let mut invoice = sample_invoice();
        invoice.currency = String::new();
        assert!(invoice.validate().is_err());
    }

    #[test]
    fn test_status_round_trips_through_strings() {
        for status in [InvoiceStatus::Draft, InvoiceStatus::Issued, InvoiceStatus::Paid] {
            assert_eq!(status.as_str().parse::<InvoiceStatus>().unwrap(), status);
        }
        assert!("overdue".parse::<InvoiceStatus>().is_err());
    }
}
