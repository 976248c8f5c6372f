//! Error types for xansql-mysql

use std::time::Duration;

use thiserror::Error;

/// Result type alias for xansql-mysql operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while configuring or using the dialect.
///
/// Driver failures are carried unchanged in [`Error::MySql`] so callers can
/// match on the native `mysql_async` error.
#[derive(Error, Debug)]
pub enum Error {
    /// MySQL driver error
    #[error("MySQL error: {0}")]
    MySql(#[from] mysql_async::Error),

    /// Connection URI could not be parsed
    #[error("Invalid connection URI: {0}")]
    UrlParse(#[from] mysql_async::UrlError),

    /// Invalid dialect or pool configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// No pooled connection became available in time
    #[error("Timed out after {0:?} waiting for a pooled connection")]
    AcquireTimeout(Duration),

    /// Type conversion error
    #[error("Type conversion error: expected {expected}, got {actual}")]
    TypeConversion {
        expected: &'static str,
        actual: String,
    },

    /// Column not found in row
    #[error("Column not found: {0}")]
    ColumnNotFound(String),

    /// Null value for non-optional field
    #[error("Unexpected null value for column: {0}")]
    UnexpectedNull(String),
}

impl From<config::ConfigError> for Error {
    fn from(err: config::ConfigError) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Config(err.to_string())
    }
}
