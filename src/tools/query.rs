//! SQL validation and execution tool.
//!
//! Implements the `validate_and_execute_sql_query` MCP tool. The handler
//! never returns an error: every failure is folded into the output's
//! failure status so the caller always receives a well-formed value and
//! discriminates by the `status` field, never by catching an error path.

use crate::db::QueryExecutor;
use crate::models::{QueryOutcome, SqlValue};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::info;

/// Prefix attached to every failure message, so callers can also
/// discriminate failure from success by inspecting the text.
const FAILURE_PREFIX: &str = "failure: ";

/// Input for the validate_and_execute_sql_query tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct ExecuteSqlInput {
    /// The SQL query to validate and execute
    pub sql_query: String,
    /// Path to the database file
    pub db_path: String,
}

/// Status of one validate_and_execute_sql_query call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum ExecuteStatus {
    /// The statement executed and has no rows to report (INSERT, UPDATE,
    /// DELETE, DDL)
    Success,
    /// Row set from a read query
    Rows,
    /// The statement failed at some stage
    Failure,
}

/// Output of the validate_and_execute_sql_query tool.
///
/// The payload fields follow the `status` value: `rows`/`row_count` are
/// present exactly when status is `rows`, `message` exactly when status is
/// `failure`, and nothing besides the status for `success`.
///
/// The MCP output schema root must be an object, so this is a struct with
/// optional payload fields rather than a tagged enum.
#[derive(Debug, Clone, PartialEq, Serialize, JsonSchema)]
pub struct ExecuteSqlOutput {
    /// Outcome discriminator: "success", "rows", or "failure"
    pub status: ExecuteStatus,
    /// One entry per returned row, values in column order (read queries only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rows: Option<Vec<Vec<SqlValue>>>,
    /// Number of returned rows (read queries only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub row_count: Option<usize>,
    /// Failure text, starting with "failure: " followed by the engine's
    /// error message (failures only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ExecuteSqlOutput {
    /// Output for a write statement that executed with no rows to report.
    pub fn success() -> Self {
        Self {
            status: ExecuteStatus::Success,
            rows: None,
            row_count: None,
            message: None,
        }
    }

    /// Output for a read query's row set.
    pub fn rows(rows: Vec<Vec<SqlValue>>) -> Self {
        let row_count = rows.len();
        Self {
            status: ExecuteStatus::Rows,
            rows: Some(rows),
            row_count: Some(row_count),
            message: None,
        }
    }

    /// Output for a captured failure; prefixes the engine's message.
    pub fn failure(message: impl AsRef<str>) -> Self {
        Self {
            status: ExecuteStatus::Failure,
            rows: None,
            row_count: None,
            message: Some(format!("{}{}", FAILURE_PREFIX, message.as_ref())),
        }
    }
}

impl From<QueryOutcome> for ExecuteSqlOutput {
    fn from(outcome: QueryOutcome) -> Self {
        match outcome {
            QueryOutcome::Empty => Self::success(),
            QueryOutcome::Rows(rows) => Self::rows(rows),
            QueryOutcome::Failure { message, .. } => Self::failure(message),
        }
    }
}

/// Handler for validated query execution.
pub struct QueryToolHandler;

impl QueryToolHandler {
    pub fn new() -> Self {
        Self
    }

    /// Handle the validate_and_execute_sql_query tool call. Infallible by
    /// contract: failures come back as the output's failure status.
    pub async fn execute_sql(&self, input: ExecuteSqlInput) -> ExecuteSqlOutput {
        let outcome = QueryExecutor::execute(&input.db_path, &input.sql_query).await;

        match &outcome {
            QueryOutcome::Empty => {
                info!(db_path = %input.db_path, "Statement executed, no rows to report");
            }
            QueryOutcome::Rows(rows) => {
                info!(db_path = %input.db_path, row_count = rows.len(), "Query executed");
            }
            QueryOutcome::Failure { kind, .. } => {
                info!(db_path = %input.db_path, kind = %kind, "Query failed");
            }
        }

        outcome.into()
    }
}

impl Default for QueryToolHandler {
    fn default() -> Self {
        Self::new()
    }
}
