//! rsdbc - A type-safe, driver-agnostic database access layer
//!
//! # Example
//! ```ignore
//! use rsdbc::{Connection, Executable};
//!
//! // Connect to database
//! let connection = Connection::connect("postgres://localhost/mydb").await?;
//!
//! // Execute a parameterized query
//! let rows = connection
//!     .prepare_statement("SELECT name, age, is_admin FROM users WHERE id = ?")
//!     .set_number(42.0)
//!     .execute()
//!     .await?;
//!
//! for row in &rows {
//!     let name = row.get_string("name")?;
//!     let age = row.get_number("age")?;
//!     let is_admin = row.get_boolean("is_admin")?;
//! }
//!
//! connection.close().await?;
//! ```

pub mod drivers;
pub mod error;
pub mod prepared;
pub mod statement;
pub mod traits;
pub mod types;

mod connection;

// Re-export main types for convenient access
pub use connection::Connection;
pub use error::{Result, RsdbcError};
pub use prepared::PreparedStatement;
pub use statement::Statement;
pub use traits::{Executable, QueryExecutor};
pub use types::{RawRow, RowData, SqlKind, SqlValue};
