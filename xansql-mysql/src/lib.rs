//! xansql-mysql - MySQL dialect for xansql
//!
//! An adapter that lets the xansql ORM talk to a MySQL-compatible database,
//! built on `mysql_async`.
//!
//! # Features
//!
//! - **Raw execution**: `execute` runs a statement verbatim and reports rows
//!   or the write outcome (`insertId`, `affectedRows`)
//! - **Schema introspection**: `get_schema` describes every table of the
//!   active database from `information_schema` and `SHOW INDEX`
//! - **Lazy pool**: construction never connects; each call checks out one
//!   pooled connection and always returns it
//!
//! # Example
//!
//! ```ignore
//! use xansql_mysql::{DialectConfig, MysqlDialect};
//!
//! async fn describe(uri: &str) -> xansql_mysql::Result<()> {
//!     let dialect = MysqlDialect::new(DialectConfig::from_uri(uri))?;
//!     for (table, columns) in dialect.get_schema().await?.tables() {
//!         println!("{table}: {} columns", columns.len());
//!     }
//!     dialect.disconnect().await
//! }
//! ```

pub mod config;
pub mod dialect;
pub mod error;
pub mod mysql;
pub mod schema;
pub mod traits;
pub mod value;

// Re-export main types
pub use config::{ConnectionOptions, DialectConfig, FileConfig, PoolConfig};
pub use dialect::MysqlDialect;
pub use error::{Error, Result};
pub use mysql::{MySqlPool, MySqlPoolBuilder, MySqlRow};
pub use schema::{ColumnDescriptor, SchemaSnapshot};
pub use traits::{
    Dialect, ExecuteResult, FromRow, FromValue, Row, RowExt, StatementResults, WriteOutcome,
};
pub use value::Value;
