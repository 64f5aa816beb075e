//! Query validation and execution.
//!
//! The executor runs a two-phase validate-then-execute sequence: the
//! statement is first handed to the engine for a query plan (a cheap
//! pre-check that rejects malformed SQL before any side effect), then
//! executed for real. All failures — connection, plan-time, run-time — are
//! captured into [`QueryOutcome::Failure`]; no error ever propagates out of
//! [`QueryExecutor::execute`], so the caller always receives a value.

use crate::db::{connection, types};
use crate::error::engine_message;
use crate::models::{FailureKind, QueryOutcome};
use sqlx::sqlite::SqliteConnection;
use tracing::debug;

/// Query executor for ad-hoc SQL against a SQLite database file.
pub struct QueryExecutor;

impl QueryExecutor {
    /// Validate and execute `sql` against the database at `db_path`.
    ///
    /// Returns exactly one of `Empty` (write succeeded), `Rows` (read
    /// succeeded), or `Failure` (any stage failed). The connection is
    /// released on every exit path.
    pub async fn execute(db_path: &str, sql: &str) -> QueryOutcome {
        let mut conn = match connection::open(db_path).await {
            Ok(conn) => conn,
            Err(err) => {
                return QueryOutcome::failure(FailureKind::Connection, err.message());
            }
        };

        let outcome = Self::run_statement(&mut conn, sql).await;
        connection::close(conn).await;

        if let QueryOutcome::Failure { kind, message } = &outcome {
            debug!(kind = %kind, message = %message, "Query failed");
        }
        outcome
    }

    async fn run_statement(conn: &mut SqliteConnection, sql: &str) -> QueryOutcome {
        // Phase 1: plan-time validation. The engine plans the same literal
        // text on the same connection, so this is best-effort validation,
        // not a transactional guarantee.
        let plan = format!("EXPLAIN QUERY PLAN {}", sql);
        if let Err(err) = sqlx::query(&plan).fetch_all(&mut *conn).await {
            return QueryOutcome::failure(FailureKind::Validation, engine_message(&err));
        }

        // Phase 2: real execution. A well-planned statement can still fail
        // here (constraint violations), hence the separate failure path.
        if is_select(sql) {
            match sqlx::query(sql).fetch_all(&mut *conn).await {
                Ok(rows) => {
                    let data: Vec<_> = rows.iter().map(types::decode_row).collect();
                    debug!(row_count = data.len(), "Read query executed");
                    QueryOutcome::Rows(data)
                }
                Err(err) => QueryOutcome::failure(FailureKind::Execution, engine_message(&err)),
            }
        } else {
            match sqlx::query(sql).execute(&mut *conn).await {
                Ok(result) => {
                    debug!(
                        rows_affected = result.rows_affected(),
                        "Write statement executed"
                    );
                    QueryOutcome::Empty
                }
                Err(err) => QueryOutcome::failure(FailureKind::Execution, engine_message(&err)),
            }
        }
    }
}

/// Classify a statement by its trimmed, case-insensitive leading keyword:
/// `SELECT` means a row set is expected, anything else is a write.
pub fn is_select(sql: &str) -> bool {
    sql.trim_start()
        .get(..6)
        .is_some_and(|head| head.eq_ignore_ascii_case("select"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_select_basic() {
        assert!(is_select("SELECT * FROM t"));
        assert!(is_select("select 1"));
        assert!(is_select("SeLeCt id FROM t"));
    }

    #[test]
    fn test_is_select_leading_whitespace() {
        assert!(is_select("   SELECT 1"));
        assert!(is_select("\n\tselect 1"));
    }

    #[test]
    fn test_is_select_writes() {
        assert!(!is_select("INSERT INTO t VALUES (1)"));
        assert!(!is_select("UPDATE t SET a = 1"));
        assert!(!is_select("DELETE FROM t"));
        assert!(!is_select("CREATE TABLE t (id INTEGER)"));
    }

    #[test]
    fn test_is_select_short_input() {
        assert!(!is_select(""));
        assert!(!is_select("sel"));
    }
}
