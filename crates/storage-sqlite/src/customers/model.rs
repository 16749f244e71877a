use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use visadesk_core::customers::{Customer, CustomerStatus, NewCustomer};

use crate::utils::{parse_date_tolerant, parse_timestamp_tolerant, DATE_FORMAT};

/// Database model for customers.
///
/// `treat_none_as_null` makes updates full replacements: a `None` field in
/// the changeset writes NULL instead of leaving the old value behind.
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
#[diesel(table_name = crate::schema::customers)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[diesel(treat_none_as_null = true)]
pub struct CustomerDB {
    pub id: String,
    pub tracking_code: String,
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub passport_number: String,
    pub consulate: String,
    pub visa_type: String,
    pub status: String,
    pub appointment_date: Option<String>,
    pub appointment_time: Option<String>,
    pub invoice_id: Option<String>,
    pub notes: Option<String>,
    pub created_at: String,
}

impl From<CustomerDB> for Customer {
    fn from(db: CustomerDB) -> Self {
        Self {
            status: db.status.parse::<CustomerStatus>().unwrap_or_else(|e| {
                log::error!("Failed to parse customer status '{}': {}", db.status, e);
                CustomerStatus::Registered
            }),
            appointment_date: db
                .appointment_date
                .as_deref()
                .and_then(|s| parse_date_tolerant(s, "appointment_date")),
            created_at: parse_timestamp_tolerant(&db.created_at, "created_at"),
            id: db.id,
            tracking_code: db.tracking_code,
            full_name: db.full_name,
            email: db.email,
            phone: db.phone,
            passport_number: db.passport_number,
            consulate: db.consulate,
            visa_type: db.visa_type,
            appointment_time: db.appointment_time,
            invoice_id: db.invoice_id,
            notes: db.notes,
        }
    }
}

impl From<Customer> for CustomerDB {
    fn from(domain: Customer) -> Self {
        Self {
            id: domain.id,
            tracking_code: domain.tracking_code,
            full_name: domain.full_name,
            email: domain.email,
            phone: domain.phone,
            passport_number: domain.passport_number,
            consulate: domain.consulate,
            visa_type: domain.visa_type,
            status: domain.status.as_str().to_string(),
            appointment_date: domain
                .appointment_date
                .map(|d| d.format(DATE_FORMAT).to_string()),
            appointment_time: domain.appointment_time,
            invoice_id: domain.invoice_id,
            notes: domain.notes,
            created_at: domain.created_at.to_rfc3339(),
        }
    }
}

impl From<NewCustomer> for CustomerDB {
    fn from(domain: NewCustomer) -> Self {
        Self {
            // Missing identifiers are filled in by the repository on insert.
            id: domain.id.unwrap_or_default(),
            tracking_code: domain.tracking_code.unwrap_or_default(),
            full_name: domain.full_name,
            email: domain.email,
            phone: domain.phone,
            passport_number: domain.passport_number,
            consulate: domain.consulate,
            visa_type: domain.visa_type,
            status: CustomerStatus::Registered.as_str().to_string(),
            appointment_date: None,
            appointment_time: None,
            invoice_id: None,
            notes: domain.notes,
            created_at: chrono::Utc::now().to_rfc3339(),
        }
    }
}
