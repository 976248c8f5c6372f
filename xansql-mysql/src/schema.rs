//! Normalized schema description handed to the host framework

use std::collections::BTreeMap;

use crate::error::Result;
use crate::traits::{FromRow, Row, RowExt};
use crate::value::Value;
use serde::Serialize;

/// Normalized description of one column.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColumnDescriptor {
    pub name: String,
    /// Declared type as reported by the server, e.g. `varchar(255)`
    #[serde(rename = "type")]
    pub column_type: String,
    pub notnull: bool,
    /// Raw default expression, `None` when the column has no default
    pub default_value: Option<String>,
    pub pk: bool,
    /// Referenced by at least one index
    pub index: bool,
    /// Referenced by at least one unique index; implies `index`
    pub unique: bool,
}

/// Every table of the active database mapped to its columns in
/// declaration order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct SchemaSnapshot {
    tables: BTreeMap<String, Vec<ColumnDescriptor>>,
}

impl SchemaSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a table. A table seen twice keeps its latest columns.
    pub fn insert(&mut self, table: impl Into<String>, columns: Vec<ColumnDescriptor>) {
        self.tables.insert(table.into(), columns);
    }

    /// Columns of `table`, if it exists.
    pub fn table(&self, table: &str) -> Option<&[ColumnDescriptor]> {
        self.tables.get(table).map(Vec::as_slice)
    }

    /// Iterate tables in name order.
    pub fn tables(&self) -> impl Iterator<Item = (&str, &[ColumnDescriptor])> {
        self.tables
            .iter()
            .map(|(name, columns)| (name.as_str(), columns.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.tables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }

    pub fn into_inner(self) -> BTreeMap<String, Vec<ColumnDescriptor>> {
        self.tables
    }
}

/// One row of `information_schema.tables`.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogTable {
    pub name: String,
}

impl FromRow for CatalogTable {
    fn from_row<R: Row>(row: &R) -> Result<Self> {
        Ok(Self {
            name: row.get("name")?,
        })
    }
}

/// One row of `information_schema.columns`.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogColumn {
    pub name: String,
    pub column_type: String,
    /// `YES` or `NO`
    pub is_nullable: String,
    pub column_default: Option<String>,
    /// `PRI`, `UNI`, `MUL` or empty
    pub column_key: String,
}

impl CatalogColumn {
    pub fn is_primary_key(&self) -> bool {
        self.column_key == "PRI"
    }

    pub fn is_not_null(&self) -> bool {
        self.is_nullable == "NO"
    }
}

impl FromRow for CatalogColumn {
    fn from_row<R: Row>(row: &R) -> Result<Self> {
        Ok(Self {
            name: row.get("name")?,
            column_type: row.get("type")?,
            is_nullable: row.get("IS_NULLABLE")?,
            column_default: default_text(row.get_value("COLUMN_DEFAULT")?),
            column_key: row.get::<Option<String>>("COLUMN_KEY")?.unwrap_or_default(),
        })
    }
}

/// One row of `SHOW INDEX FROM <table>`.
#[derive(Debug, Clone, PartialEq)]
pub struct IndexEntry {
    pub key_name: String,
    /// `None` for functional key parts, which index an expression
    pub column_name: Option<String>,
    pub non_unique: bool,
}

impl FromRow for IndexEntry {
    fn from_row<R: Row>(row: &R) -> Result<Self> {
        Ok(Self {
            key_name: row.get("Key_name")?,
            column_name: row.get("Column_name")?,
            non_unique: row.get::<i64>("Non_unique")? != 0,
        })
    }
}

/// Join column metadata with index metadata into descriptors.
///
/// Output order follows `columns`. Index entries naming a column that is not
/// in `columns` are ignored.
pub fn describe_columns(columns: &[CatalogColumn], indexes: &[IndexEntry]) -> Vec<ColumnDescriptor> {
    columns
        .iter()
        .map(|col| {
            let mut index = false;
            let mut unique = false;
            for entry in indexes
                .iter()
                .filter(|idx| idx.column_name.as_deref() == Some(col.name.as_str()))
            {
                index = true;
                unique |= !entry.non_unique;
            }

            ColumnDescriptor {
                name: col.name.clone(),
                column_type: col.column_type.clone(),
                notnull: col.is_not_null(),
                default_value: col.column_default.clone(),
                pk: col.is_primary_key(),
                index,
                unique,
            }
        })
        .collect()
}

/// Render a catalog default as text. Defaults are stored as text by the
/// server; binary column defaults come back as raw bytes.
fn default_text(value: Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s),
        Value::Bytes(b) => Some(String::from_utf8_lossy(&b).into_owned()),
        Value::Int(v) => Some(v.to_string()),
        Value::UInt(v) => Some(v.to_string()),
        Value::Float(v) => Some(v.to_string()),
        Value::Double(v) => Some(v.to_string()),
        Value::Date(v) => Some(v.to_string()),
        Value::DateTime(v) => Some(v.to_string()),
        Value::Time(v) => Some(v.to_string()),
    }
}
