use async_trait::async_trait;

use crate::error::Result;
use crate::types::{RawRow, SqlValue};

/// Trait for query execution backends.
/// Executors are responsible for:
/// - Holding the underlying database resources
/// - Converting SqlValue parameters to native types
/// - Running query text and returning raw rows
#[async_trait]
pub trait QueryExecutor: Send + Sync {
    /// Run a SQL query with the given ordered parameters.
    /// Query text uses PostgreSQL-style positional tokens ($1, $2, etc.);
    /// plain statements pass an empty parameter list.
    async fn query(&self, sql: &str, params: &[SqlValue]) -> Result<Vec<RawRow>>;

    /// Release all resources held by this executor.
    async fn end(&self) -> Result<()>;
}
