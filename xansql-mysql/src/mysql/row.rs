//! MySQL row implementation

use crate::error::{Error, Result};
use crate::traits::Row;
use crate::value::Value;
use mysql_async::Row as MySqlAsyncRow;
use serde::ser::{Serialize, SerializeMap, Serializer};

use super::types::from_column_value;

/// A MySQL database row.
///
/// Columns keep the order the server reported them in, which is also the
/// order they serialize in. Lookup by name returns the first match, so a
/// duplicated column label (e.g. from a join) resolves to its leftmost column.
#[derive(Debug, Clone, PartialEq)]
pub struct MySqlRow {
    columns: Vec<(String, Value)>,
}

impl MySqlRow {
    /// Create a new MySqlRow from a mysql_async Row, decoding each cell by
    /// its column type.
    pub fn from_mysql_row(row: MySqlAsyncRow) -> Result<Self> {
        let meta = row.columns();
        let raw = row.unwrap_raw();

        let mut columns = Vec::with_capacity(meta.len());
        for (column, value) in meta.iter().zip(raw) {
            let name = column.name_str().into_owned();
            // A `None` slot means the value was already taken out of the row.
            let value = value.ok_or_else(|| Error::ColumnNotFound(name.clone()))?;
            let value = from_column_value(value, column.column_type(), column.flags())?;
            columns.push((name, value));
        }

        Ok(Self { columns })
    }

    /// Build a row from already converted values.
    pub fn from_pairs<I, S>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (S, Value)>,
        S: Into<String>,
    {
        Self {
            columns: pairs.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }

    /// Column names in server order.
    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|(name, _)| name.as_str())
    }

    /// Number of columns in the row.
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Whether the row has no columns.
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    fn find(&self, column: &str) -> Option<&Value> {
        self.columns
            .iter()
            .find(|(name, _)| name == column)
            .map(|(_, value)| value)
    }
}

impl Row for MySqlRow {
    fn get_value(&self, column: &str) -> Result<Value> {
        self.find(column)
            .cloned()
            .ok_or_else(|| Error::ColumnNotFound(column.to_string()))
    }
}

impl Serialize for MySqlRow {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.columns.len()))?;
        for (name, value) in &self.columns {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}
