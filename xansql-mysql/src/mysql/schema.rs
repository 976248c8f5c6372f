//! Schema introspection through `information_schema` and `SHOW INDEX`

use crate::error::Result;
use crate::schema::{
    describe_columns, CatalogColumn, CatalogTable, ColumnDescriptor, IndexEntry, SchemaSnapshot,
};
use crate::traits::FromRow;
use mysql_async::prelude::*;
use mysql_async::{Conn, Row as MySqlAsyncRow};
use tracing::{debug, trace};

use super::pool::MySqlPool;
use super::row::MySqlRow;

/// Tables (and views) of the active database.
pub const TABLES_SQL: &str = "SELECT table_name AS name \
     FROM information_schema.tables \
     WHERE table_schema = DATABASE()";

/// Columns of one table; the table name is bound as a parameter.
pub const COLUMNS_SQL: &str = "SELECT \
     COLUMN_NAME AS name, \
     COLUMN_TYPE AS type, \
     IS_NULLABLE, \
     COLUMN_DEFAULT, \
     COLUMN_KEY \
     FROM information_schema.columns \
     WHERE table_schema = DATABASE() \
     AND table_name = ? \
     ORDER BY ORDINAL_POSITION";

/// Quote an identifier with backticks, doubling any embedded backtick.
///
/// `SHOW INDEX` takes no bound parameters, so the table name is spliced into
/// the statement text. Names come from the catalog, never from user input.
pub fn quote_identifier(name: &str) -> String {
    format!("`{}`", name.replace('`', "``"))
}

/// `SHOW INDEX` statement for one table.
pub fn show_index_sql(table: &str) -> String {
    format!("SHOW INDEX FROM {}", quote_identifier(table))
}

/// Describe every table of the active database.
///
/// All catalog queries run on one pooled connection, which is released on
/// every exit path. The first failing query aborts the whole call; no partial
/// snapshot is returned.
pub async fn get_schema(pool: &MySqlPool) -> Result<SchemaSnapshot> {
    let mut conn = pool.acquire().await?;

    let tables: Vec<CatalogTable> = map_rows(conn.query(TABLES_SQL).await?)?;
    debug!(tables = tables.len(), "Introspecting schema");

    let mut snapshot = SchemaSnapshot::new();
    for table in tables {
        let columns = describe_table(&mut conn, &table.name).await?;
        trace!(table = %table.name, columns = columns.len(), "Described table");
        snapshot.insert(table.name, columns);
    }

    Ok(snapshot)
}

async fn describe_table(conn: &mut Conn, table: &str) -> Result<Vec<ColumnDescriptor>> {
    let columns: Vec<CatalogColumn> = map_rows(conn.exec(COLUMNS_SQL, (table,)).await?)?;
    let indexes: Vec<IndexEntry> = map_rows(conn.query(show_index_sql(table)).await?)?;
    Ok(describe_columns(&columns, &indexes))
}

fn map_rows<T: FromRow>(rows: Vec<MySqlAsyncRow>) -> Result<Vec<T>> {
    rows.into_iter()
        .map(|row| T::from_row(&MySqlRow::from_mysql_row(row)?))
        .collect()
}
