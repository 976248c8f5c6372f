//! Dialect trait: the adapter contract consumed by the host framework

use crate::config::FileConfig;
use crate::error::Result;
use crate::mysql::MySqlRow;
use crate::schema::SchemaSnapshot;
use async_trait::async_trait;
use serde::Serialize;

/// Outcome metadata of a statement that returned no result set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WriteOutcome {
    pub affected_rows: u64,
    /// Last insert ID, 0 when the statement generated none
    pub insert_id: u64,
    /// Server info string (e.g. "Records: 2  Duplicates: 0  Warnings: 0")
    pub info: String,
    pub warning_status: u16,
}

/// What a statement produced, inferred from the shape of the driver response.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum StatementResults {
    /// The response carried a result set (SELECT, SHOW, ...)
    Rows(Vec<MySqlRow>),
    /// The response was an OK packet (INSERT, UPDATE, DDL, ...)
    Outcome(WriteOutcome),
}

impl StatementResults {
    /// Rows of a result set, if this was one.
    pub fn rows(&self) -> Option<&[MySqlRow]> {
        match self {
            StatementResults::Rows(rows) => Some(rows),
            StatementResults::Outcome(_) => None,
        }
    }

    /// Write outcome, if the statement returned no result set.
    pub fn outcome(&self) -> Option<&WriteOutcome> {
        match self {
            StatementResults::Rows(_) => None,
            StatementResults::Outcome(outcome) => Some(outcome),
        }
    }
}

/// Result of executing one raw statement.
///
/// `insert_id` and `affected_rows` are always present and default to 0 when
/// the statement has no such outcome.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExecuteResult {
    pub results: StatementResults,
    pub insert_id: u64,
    pub affected_rows: u64,
}

impl ExecuteResult {
    /// Build a result from a write outcome, lifting its counters.
    pub fn from_outcome(outcome: WriteOutcome) -> Self {
        Self {
            insert_id: outcome.insert_id,
            affected_rows: outcome.affected_rows,
            results: StatementResults::Outcome(outcome),
        }
    }
}

/// A database dialect as seen by the host framework.
///
/// Implementations must be safe to call concurrently; each call works on its
/// own pooled connection.
#[async_trait]
pub trait Dialect: Send + Sync {
    /// Engine tag identifying this dialect to the host.
    fn engine(&self) -> &'static str;

    /// Execute one raw SQL statement.
    async fn execute(&self, sql: &str) -> Result<ExecuteResult>;

    /// Describe every table of the active database.
    async fn get_schema(&self) -> Result<SchemaSnapshot>;

    /// Host file settings passed through from construction.
    fn file(&self) -> Option<&FileConfig>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::Value;
    use serde_json::json;

    #[test]
    fn test_outcome_serializes_like_host_result() {
        let result = ExecuteResult::from_outcome(WriteOutcome {
            affected_rows: 1,
            insert_id: 42,
            info: String::new(),
            warning_status: 0,
        });
        assert_eq!(
            serde_json::to_value(&result).unwrap(),
            json!({
                "results": {
                    "affectedRows": 1,
                    "insertId": 42,
                    "info": "",
                    "warningStatus": 0
                },
                "insertId": 42,
                "affectedRows": 1
            })
        );
    }

    #[test]
    fn test_rows_serialize_as_array() {
        let row = MySqlRow::from_pairs([("id", Value::Int(1))]);
        let result = ExecuteResult {
            results: StatementResults::Rows(vec![row]),
            insert_id: 0,
            affected_rows: 0,
        };
        assert_eq!(
            serde_json::to_value(&result).unwrap(),
            json!({ "results": [{ "id": 1 }], "insertId": 0, "affectedRows": 0 })
        );
        assert_eq!(result.results.rows().map(<[_]>::len), Some(1));
        assert!(result.results.outcome().is_none());
    }
}
