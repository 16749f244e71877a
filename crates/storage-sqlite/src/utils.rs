//! Utility functions for SQLite storage operations.
//!
//! SQLite has no native decimal, timestamp, or date types, so those values are
//! stored as TEXT. The helpers here centralize the formats used on write and
//! the tolerant parsing applied when rows are read back.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use std::str::FromStr;

/// Storage format for calendar dates (appointment dates).
pub(crate) const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parses a TEXT decimal column, falling back to zero on malformed data.
///
/// A malformed amount is logged and replaced rather than failing the whole
/// read, so one corrupt row cannot make a collection unreadable.
pub(crate) fn parse_decimal_tolerant(value_str: &str, field_name: &str) -> Decimal {
    Decimal::from_str(value_str).unwrap_or_else(|e| {
        log::error!(
            "Failed to parse {} '{}': {}. Falling back to zero.",
            field_name,
            value_str,
            e
        );
        Decimal::ZERO
    })
}

/// Parses a TEXT RFC 3339 timestamp column, falling back to now on malformed data.
pub(crate) fn parse_timestamp_tolerant(value_str: &str, field_name: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(value_str)
        .map(|dt| dt.with_timezone(&Utc))
        .unwrap_or_else(|e| {
            log::error!("Failed to parse {} '{}': {}", field_name, value_str, e);
            Utc::now()
        })
}

/// Parses a TEXT date column; malformed dates read back as `None`.
pub(crate) fn parse_date_tolerant(value_str: &str, field_name: &str) -> Option<NaiveDate> {
    match NaiveDate::parse_from_str(value_str, DATE_FORMAT) {
        Ok(date) => Some(date),
        Err(e) => {
            log::error!("Failed to parse {} '{}': {}", field_name, value_str, e);
            None
        }
    }
}
