//! MySQL implementation for xansql-mysql

mod executor;
mod pool;
mod row;
mod schema;
mod types;

pub use executor::execute;
pub use pool::{MySqlPool, MySqlPoolBuilder};
pub use row::MySqlRow;
pub use schema::{get_schema, quote_identifier, show_index_sql, COLUMNS_SQL, TABLES_SQL};
pub use types::{from_column_value, from_mysql_value};
