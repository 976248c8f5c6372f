//! FromRow trait for mapping database rows to Rust structs

use crate::error::Result;
use crate::value::Value;

/// A database row that can be queried by column name.
pub trait Row {
    /// Get a value from the row by column name as a dynamic Value.
    ///
    /// Returns an error if the column doesn't exist.
    fn get_value(&self, column: &str) -> Result<Value>;
}

/// Extension trait for typed access to row values.
pub trait RowExt: Row {
    /// Get a typed value from the row by column name.
    fn get<T: crate::FromValue>(&self, column: &str) -> Result<T> {
        let value = self.get_value(column)?;
        T::from_value(value)
    }
}

impl<R: Row> RowExt for R {}

/// Trait for types that can be constructed from a database row.
///
/// ```ignore
/// use xansql_mysql::{FromRow, Row, RowExt, Result};
///
/// pub struct TableName {
///     pub name: String,
/// }
///
/// impl FromRow for TableName {
///     fn from_row<R: Row>(row: &R) -> Result<Self> {
///         Ok(Self { name: row.get("name")? })
///     }
/// }
/// ```
pub trait FromRow: Sized {
    /// Construct an instance of this type from a database row.
    fn from_row<R: Row>(row: &R) -> Result<Self>;
}
