mod row;
mod sql_value;

pub use row::{RawRow, RowData};
pub use sql_value::{SqlKind, SqlValue};
