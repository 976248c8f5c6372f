//! Core traits for xansql-mysql

mod dialect;
mod from_row;
mod from_value;

pub use dialect::{Dialect, ExecuteResult, StatementResults, WriteOutcome};
pub use from_row::{FromRow, Row, RowExt};
pub use from_value::FromValue;
