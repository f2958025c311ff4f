use std::collections::HashMap;

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};

use crate::error::{Result, RsdbcError};
use crate::types::{SqlKind, SqlValue};

/// Untyped result row as produced by a query executor: a case-sensitive
/// mapping from column label to a dynamically-kinded value.
pub type RawRow = HashMap<String, SqlValue>;

/// A single row result with strictly-typed accessors.
///
/// Wraps exactly one raw row for its lifetime; immutable after
/// construction. Each accessor reads the stored value as the requested
/// logical type or fails with a typed error. `Null` is a legal value for
/// every type and reads as `None`, before any type check.
///
/// Exactly two coercions are sanctioned: numeric-looking text reads as a
/// number, and date-looking text reads as a date. Everything else is a
/// `ColumnTypeError`.
#[derive(Debug, Clone)]
pub struct RowData {
    values: RawRow,
}

impl RowData {
    pub(crate) fn new(values: RawRow) -> Self {
        Self { values }
    }

    /// Reads a text column. Only text values qualify.
    pub fn get_string(&self, column_label: &str) -> Result<Option<String>> {
        match self.value(column_label, SqlKind::String)? {
            SqlValue::Null => Ok(None),
            SqlValue::Text(text) => Ok(Some(text.clone())),
            other => Err(type_error(column_label, SqlKind::String, other.kind())),
        }
    }

    /// Reads a numeric column. Text is accepted only if it parses as a
    /// number (`"46.99"` reads as `46.99`).
    pub fn get_number(&self, column_label: &str) -> Result<Option<f64>> {
        match self.value(column_label, SqlKind::Number)? {
            SqlValue::Null => Ok(None),
            SqlValue::Number(number) => Ok(Some(*number)),
            SqlValue::Text(text) => parse_number_text(text)
                .map(Some)
                .ok_or_else(|| type_error(column_label, SqlKind::Number, SqlKind::String)),
            other => Err(type_error(column_label, SqlKind::Number, other.kind())),
        }
    }

    /// Reads a boolean column. Only boolean values qualify.
    pub fn get_boolean(&self, column_label: &str) -> Result<Option<bool>> {
        match self.value(column_label, SqlKind::Boolean)? {
            SqlValue::Null => Ok(None),
            SqlValue::Bool(value) => Ok(Some(*value)),
            other => Err(type_error(column_label, SqlKind::Boolean, other.kind())),
        }
    }

    /// Reads a date/timestamp column. Text is accepted only if it parses
    /// as a valid calendar date or timestamp.
    pub fn get_date(&self, column_label: &str) -> Result<Option<NaiveDateTime>> {
        match self.value(column_label, SqlKind::Date)? {
            SqlValue::Null => Ok(None),
            SqlValue::Timestamp(timestamp) => Ok(Some(*timestamp)),
            SqlValue::Text(text) => parse_date_text(text)
                .map(Some)
                .ok_or_else(|| type_error(column_label, SqlKind::Date, SqlKind::String)),
            other => Err(type_error(column_label, SqlKind::Date, other.kind())),
        }
    }

    /// Returns all column labels in this row.
    pub fn columns(&self) -> Vec<&str> {
        self.values.keys().map(|s| s.as_str()).collect()
    }

    /// Returns the number of columns in this row.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns true if this row has no columns.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    fn value(&self, column_label: &str, expected: SqlKind) -> Result<&SqlValue> {
        self.values
            .get(column_label)
            .ok_or_else(|| RsdbcError::ColumnNotFound {
                column: column_label.to_string(),
                expected,
            })
    }
}

fn type_error(column_label: &str, expected: SqlKind, actual: SqlKind) -> RsdbcError {
    RsdbcError::ColumnTypeError {
        column: column_label.to_string(),
        expected,
        actual,
    }
}

fn parse_number_text(text: &str) -> Option<f64> {
    text.trim().parse::<f64>().ok().filter(|n| !n.is_nan())
}

/// Accepts RFC 3339 timestamps, `YYYY-MM-DD HH:MM:SS`, and bare
/// `YYYY-MM-DD` dates (read as midnight).
fn parse_date_text(text: &str) -> Option<NaiveDateTime> {
    if let Ok(timestamp) = DateTime::parse_from_rfc3339(text) {
        return Some(timestamp.naive_utc());
    }
    if let Ok(timestamp) = NaiveDateTime::parse_from_str(text, "%Y-%m-%d %H:%M:%S") {
        return Some(timestamp);
    }
    NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .ok()
        .map(|date| date.and_time(NaiveTime::MIN))
}
