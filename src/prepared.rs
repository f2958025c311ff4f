use std::sync::Arc;

use async_trait::async_trait;
use chrono::NaiveDateTime;

use crate::error::Result;
use crate::statement::run;
use crate::traits::{Executable, QueryExecutor};
use crate::types::{RowData, SqlValue};

/// A statement with ordered positional parameters.
///
/// Portable `?` placeholders in the query text are translated to
/// PostgreSQL-style `$1`, `$2`, ... tokens once, at construction. Setters
/// are append-only and must be called in placeholder order. The bound
/// count is not checked against the placeholder count; a mismatch surfaces
/// as the executor's own error.
pub struct PreparedStatement {
    executor: Arc<dyn QueryExecutor>,
    sql: String,
    params: Vec<SqlValue>,
}

impl PreparedStatement {
    pub(crate) fn new(executor: Arc<dyn QueryExecutor>, sql: &str) -> Self {
        Self {
            executor,
            sql: translate_placeholders(sql),
            params: Vec::new(),
        }
    }

    /// Returns the translated query text this statement issues.
    pub fn sql(&self) -> &str {
        &self.sql
    }

    /// Binds a text value to the next placeholder.
    pub fn set_string(mut self, value: impl Into<String>) -> Self {
        self.params.push(SqlValue::Text(value.into()));
        self
    }

    /// Binds a numeric value to the next placeholder.
    pub fn set_number(mut self, value: f64) -> Self {
        self.params.push(SqlValue::Number(value));
        self
    }

    /// Binds a boolean value to the next placeholder.
    pub fn set_boolean(mut self, value: bool) -> Self {
        self.params.push(SqlValue::Bool(value));
        self
    }

    /// Binds a date/time value to the next placeholder.
    pub fn set_date(mut self, value: NaiveDateTime) -> Self {
        self.params.push(SqlValue::Timestamp(value));
        self
    }
}

#[async_trait]
impl Executable for PreparedStatement {
    async fn execute(&self) -> Result<Vec<RowData>> {
        run(&*self.executor, &self.sql, &self.params).await
    }
}

/// Rewrites each `?` into `$1`, `$2`, ... in left-to-right scan order.
///
/// The scan is character-by-character with no string-literal or comment
/// awareness: a `?` inside quoted text is rewritten like any other.
fn translate_placeholders(sql: &str) -> String {
    let mut translated = String::with_capacity(sql.len());
    let mut position = 0usize;
    for ch in sql.chars() {
        if ch == '?' {
            position += 1;
            translated.push('$');
            translated.push_str(&position.to_string());
        } else {
            translated.push(ch);
        }
    }
    translated
}
