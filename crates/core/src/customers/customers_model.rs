//! Customer domain models.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::customers::tracking_code::is_valid_tracking_code;
use crate::{errors::ValidationError, Error, Result};

/// Lifecycle status of a customer file.
///
/// The status advances as the intake progresses: the customer registers, an
/// appointment gets scheduled, an invoice is issued and finally paid. `Paid`
/// is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum CustomerStatus {
    #[default]
    Registered,
    AppointmentScheduled,
    Invoiced,
    Paid,
}

impl CustomerStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            CustomerStatus::Registered => "registered",
            CustomerStatus::AppointmentScheduled => "appointment-scheduled",
            CustomerStatus::Invoiced => "invoiced",
            CustomerStatus::Paid => "paid",
        }
    }

    /// Whether an appointment may be scheduled (or rescheduled) in this status.
    pub fn can_schedule(&self) -> bool {
        matches!(
            self,
            CustomerStatus::Registered | CustomerStatus::AppointmentScheduled
        )
    }

    /// Whether an invoice may be issued (or reissued) in this status.
    pub fn can_invoice(&self) -> bool {
        !matches!(self, CustomerStatus::Paid)
    }

    /// Whether a payment may be recorded in this status.
    pub fn can_record_payment(&self) -> bool {
        matches!(self, CustomerStatus::Invoiced)
    }
}

impl fmt::Display for CustomerStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for CustomerStatus {
    type Err = ValidationError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "registered" => Ok(CustomerStatus::Registered),
            "appointment-scheduled" => Ok(CustomerStatus::AppointmentScheduled),
            "invoiced" => Ok(CustomerStatus::Invoiced),
            "paid" => Ok(CustomerStatus::Paid),
            other => Err(ValidationError::InvalidInput(format!(
                "Unknown customer status '{}'",
                other
            ))),
        }
    }
}

/// Domain model representing a customer file in the system.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    pub id: String,
    /// Short human-facing code handed out at registration, used for lookups
    pub tracking_code: String,
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub passport_number: String,
    pub consulate: String,
    pub visa_type: String,
    pub status: CustomerStatus,
    pub appointment_date: Option<NaiveDate>,
    /// Free-form time of day, e.g. "09:30"
    pub appointment_time: Option<String>,
    /// Most recently issued invoice for this customer, if any
    pub invoice_id: Option<String>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Input model for registering a new customer.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCustomer {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Explicit tracking code; one is generated when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tracking_code: Option<String>,
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub passport_number: String,
    pub consulate: String,
    pub visa_type: String,
    pub notes: Option<String>,
}

impl NewCustomer {
    /// Validates the new customer data.
    pub fn validate(&self) -> Result<()> {
        let required = [
            (&self.full_name, "fullName"),
            (&self.email, "email"),
            (&self.phone, "phone"),
            (&self.passport_number, "passportNumber"),
            (&self.consulate, "consulate"),
            (&self.visa_type, "visaType"),
        ];
        for (value, field) in required {
            if value.trim().is_empty() {
                return Err(Error::Validation(ValidationError::MissingField(
                    field.to_string(),
                )));
            }
        }
        if let Some(code) = &self.tracking_code {
            if !is_valid_tracking_code(code) {
                return Err(Error::Validation(ValidationError::InvalidInput(format!(
                    "Invalid tracking code '{}'",
                    code
                ))));
            }
        }
        Ok(())
    }
}

/// Counts of customer files by status, as shown on the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct CustomerStatusSummary {
    pub total: usize,
    pub registered: usize,
    pub scheduled: usize,
    pub invoiced: usize,
    pub paid: usize,
}
