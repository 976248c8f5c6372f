//! Raw SQL execution

use crate::error::Result;
use crate::traits::{ExecuteResult, StatementResults, WriteOutcome};
use mysql_async::prelude::*;
use mysql_async::Row as MySqlAsyncRow;
use tracing::debug;

use super::pool::MySqlPool;
use super::row::MySqlRow;

/// Run one SQL statement verbatim on a pooled connection.
///
/// The statement is sent through the text protocol with no parameters, so
/// the caller is responsible for building safe SQL. Whether the response
/// carries rows or a write outcome is decided from the response itself, not
/// from the SQL text.
///
/// The driver allows several `;`-separated statements in one call. Only the
/// first result set is reported; later ones are read and discarded, and an
/// error in any of them fails the whole call.
///
/// The connection is released when it goes out of scope, before any error
/// reaches the caller.
pub async fn execute(pool: &MySqlPool, sql: &str) -> Result<ExecuteResult> {
    let mut conn = pool.acquire().await?;
    debug!(connection_id = conn.id(), sql_len = sql.len(), "Executing statement");

    let result = conn.query_iter(sql).await?;

    if result.columns_ref().is_empty() {
        // Read before draining: later result sets overwrite these counters.
        let outcome = WriteOutcome {
            affected_rows: result.affected_rows(),
            insert_id: result.last_insert_id().unwrap_or(0),
            info: result.info().into_owned(),
            warning_status: result.warnings(),
        };
        result.drop_result().await?;

        debug!(
            affected_rows = outcome.affected_rows,
            insert_id = outcome.insert_id,
            "Statement returned write outcome"
        );
        return Ok(ExecuteResult::from_outcome(outcome));
    }

    let rows: Vec<MySqlAsyncRow> = result.collect_and_drop().await?;
    let rows = rows
        .into_iter()
        .map(MySqlRow::from_mysql_row)
        .collect::<Result<Vec<_>>>()?;
    debug!(rows = rows.len(), "Statement returned rows");

    Ok(ExecuteResult {
        results: StatementResults::Rows(rows),
        insert_id: 0,
        affected_rows: 0,
    })
}
