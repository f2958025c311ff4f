use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use crate::error::Result;
use crate::traits::{Executable, QueryExecutor};
use crate::types::{RowData, SqlValue};

/// A statement bound to literal query text.
///
/// Stateless and repeatable: every `execute` issues the stored text
/// verbatim, with no parameters.
pub struct Statement {
    executor: Arc<dyn QueryExecutor>,
    sql: String,
}

impl Statement {
    pub(crate) fn new(executor: Arc<dyn QueryExecutor>, sql: impl Into<String>) -> Self {
        Self {
            executor,
            sql: sql.into(),
        }
    }

    /// Returns the query text this statement issues.
    pub fn sql(&self) -> &str {
        &self.sql
    }
}

#[async_trait]
impl Executable for Statement {
    async fn execute(&self) -> Result<Vec<RowData>> {
        run(&*self.executor, &self.sql, &[]).await
    }
}

/// Shared executor-invocation path for plain and prepared statements:
/// runs the query and wraps each returned raw row in a RowData.
pub(crate) async fn run(
    executor: &dyn QueryExecutor,
    sql: &str,
    params: &[SqlValue],
) -> Result<Vec<RowData>> {
    debug!(sql, params = params.len(), "executing query");
    let rows = executor.query(sql, params).await?;
    Ok(rows.into_iter().map(RowData::new).collect())
}
