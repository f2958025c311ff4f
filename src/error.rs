use thiserror::Error;

use crate::types::SqlKind;

/// Error type for rsdbc operations
#[derive(Debug, Error)]
pub enum RsdbcError {
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    #[error("Query failed: {0}")]
    QueryFailed(String),

    /// The requested column label is absent from the row.
    ///
    /// Message wording differs by accessor: the boolean accessor reports
    /// `Column 'x' not found`, the others `Column 'x' was not found`.
    #[error("{}", column_not_found_message(.column, .expected))]
    ColumnNotFound { column: String, expected: SqlKind },

    /// The column exists but its value's kind cannot be read as the
    /// requested logical type.
    #[error("Expected column '{column}' to be a '{expected}', received '{actual}' instead")]
    ColumnTypeError {
        column: String,
        expected: SqlKind,
        actual: SqlKind,
    },

    #[error("Method not implemented: {0}")]
    Unimplemented(&'static str),
}

fn column_not_found_message(column: &str, expected: &SqlKind) -> String {
    match expected {
        SqlKind::Boolean => format!("Column '{column}' not found"),
        _ => format!("Column '{column}' was not found"),
    }
}

/// Result type alias for rsdbc operations
pub type Result<T> = std::result::Result<T, RsdbcError>;
