use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use visadesk_core::invoices::{Invoice, InvoiceStatus, NewInvoice};

use crate::utils::{parse_decimal_tolerant, parse_timestamp_tolerant};

/// Database model for invoices.
///
/// Amounts are stored as TEXT to keep their exact decimal representation.
#[derive(
    Queryable,
    Identifiable,
    Insertable,
    AsChangeset,
    Selectable,
    PartialEq,
    Serialize,
    Deserialize,
    Debug,
    Clone,
)]
#[diesel(table_name = crate::schema::invoices)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct InvoiceDB {
    pub id: String,
    pub tracking_code: String,
    pub amount: String,
    pub currency: String,
    pub description: String,
    pub status: String,
    pub created_at: String,
}

impl From<InvoiceDB> for Invoice {
    fn from(db: InvoiceDB) -> Self {
        Self {
            amount: parse_decimal_tolerant(&db.amount, "invoice amount"),
            status: db.status.parse::<InvoiceStatus>().unwrap_or_else(|e| {
                log::error!("Failed to parse invoice status '{}': {}", db.status, e);
                InvoiceStatus::Issued
            }),
            created_at: parse_timestamp_tolerant(&db.created_at, "created_at"),
            id: db.id,
            tracking_code: db.tracking_code,
            currency: db.currency,
            description: db.description,
        }
    }
}

impl From<NewInvoice> for InvoiceDB {
    fn from(domain: NewInvoice) -> Self {
        Self {
            // A missing id is filled in by the repository on insert.
            id: domain.id.unwrap_or_default(),
            tracking_code: domain.tracking_code,
            amount: domain.amount.to_string(),
            currency: domain.currency,
            description: domain.description,
            status: domain.status.as_str().to_string(),
            created_at: chrono::Utc::now().to_rfc3339(),
        }
    }
}
