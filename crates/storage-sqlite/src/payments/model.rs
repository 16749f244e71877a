use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use visadesk_core::payments::{NewPayment, PaymentRecord};

use crate::utils::{parse_decimal_tolerant, parse_timestamp_tolerant};

/// Database model for payments.
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
#[diesel(table_name = crate::schema::payments)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct PaymentDB {
    pub id: String,
    pub tracking_code: String,
    pub invoice_id: String,
    pub amount: String,
    pub payment_method: String,
    pub payment_date: String,
    pub notes: Option<String>,
}

impl From<PaymentDB> for PaymentRecord {
    fn from(db: PaymentDB) -> Self {
        Self {
            amount: parse_decimal_tolerant(&db.amount, "payment amount"),
            payment_date: parse_timestamp_tolerant(&db.payment_date, "payment_date"),
            id: db.id,
            tracking_code: db.tracking_code,
            invoice_id: db.invoice_id,
            payment_method: db.payment_method,
            notes: db.notes,
        }
    }
}

impl From<NewPayment> for PaymentDB {
    fn from(domain: NewPayment) -> Self {
        Self {
            // A missing id is filled in by the repository on insert.
            id: domain.id.unwrap_or_default(),
            tracking_code: domain.tracking_code,
            invoice_id: domain.invoice_id,
            amount: domain.amount.to_string(),
            payment_method: domain.payment_method,
            payment_date: domain.payment_date.to_rfc3339(),
            notes: domain.notes,
        }
    }
}
