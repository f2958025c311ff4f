use std::fmt;

use chrono::NaiveDateTime;

/// Represents a SQL value in a driver-agnostic way.
///
/// Plays a dual role: executors produce these as result-row values, and
/// prepared statements accumulate them as bound parameters. Executors are
/// responsible for converting them to and from their native types.
#[derive(Debug, Clone, PartialEq)]
pub enum SqlValue {
    Null,
    Text(String),
    Number(f64),
    Bool(bool),
    Timestamp(NaiveDateTime),
    /// Anything the executor could not classify, e.g. json objects or arrays.
    Other(serde_json::Value),
}

/// The closed set of logical kinds used by the row accessors and their
/// error messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SqlKind {
    String,
    Number,
    Boolean,
    Date,
    Unknown,
}

impl SqlValue {
    /// Classifies this value for the accessor compatibility tables.
    ///
    /// `Null` never reaches classification: the accessors short-circuit
    /// null values before any kind check.
    pub fn kind(&self) -> SqlKind {
        match self {
            SqlValue::Text(_) => SqlKind::String,
            SqlValue::Number(_) => SqlKind::Number,
            SqlValue::Bool(_) => SqlKind::Boolean,
            SqlValue::Timestamp(_) => SqlKind::Date,
            SqlValue::Null | SqlValue::Other(_) => SqlKind::Unknown,
        }
    }
}

impl fmt::Display for SqlKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SqlKind::String => "string",
            SqlKind::Number => "number",
            SqlKind::Boolean => "boolean",
            SqlKind::Date => "Date",
            SqlKind::Unknown => "unknown",
        };
        f.write_str(name)
    }
}

impl From<&str> for SqlValue {
    fn from(value: &str) -> Self {
        SqlValue::Text(value.to_string())
    }
}

impl From<String> for SqlValue {
    fn from(value: String) -> Self {
        SqlValue::Text(value)
    }
}

impl From<f64> for SqlValue {
    fn from(value: f64) -> Self {
        SqlValue::Number(value)
    }
}

impl From<i32> for SqlValue {
    fn from(value: i32) -> Self {
        SqlValue::Number(value.into())
    }
}

impl From<bool> for SqlValue {
    fn from(value: bool) -> Self {
        SqlValue::Bool(value)
    }
}

impl From<NaiveDateTime> for SqlValue {
    fn from(value: NaiveDateTime) -> Self {
        SqlValue::Timestamp(value)
    }
}

impl<T: Into<SqlValue>> From<Option<T>> for SqlValue {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(v) => v.into(),
            None => SqlValue::Null,
        }
    }
}
