use async_trait::async_trait;

use crate::error::Result;
use crate::types::RowData;

/// Trait for executable queries, shared by plain and prepared statements.
#[async_trait]
pub trait Executable {
    /// Run the query and return one RowData per raw row, in the order the
    /// executor returned them.
    async fn execute(&self) -> Result<Vec<RowData>>;
}
