//! Schema introspection.
//!
//! Produces a [`SchemaReport`] for a database file: every table from the
//! catalog with its columns and up to [`SAMPLE_ROW_LIMIT`] sample values
//! per column. Each call opens a fresh read-only connection and closes it
//! before returning; a failure anywhere fails the whole call — a partial
//! report has no meaning half-built.

use crate::db::{connection, quote_identifier, types};
use crate::error::ExplorerResult;
use crate::models::{ColumnInfo, SchemaReport, TableSchema};
use sqlx::Row;
use sqlx::sqlite::SqliteConnection;
use tracing::debug;

/// Maximum sample rows fetched per table.
pub const SAMPLE_ROW_LIMIT: usize = 3;

/// Catalog query for table names, in the catalog's native return order.
/// Deliberately unordered and unfiltered: the report mirrors whatever the
/// engine lists as a table.
const LIST_TABLES: &str = "SELECT name FROM sqlite_master WHERE type = 'table'";

/// Schema inspector for SQLite database files.
pub struct SchemaInspector;

impl SchemaInspector {
    /// Inspect the database at `db_path` and return its schema with
    /// per-column sample values.
    ///
    /// Fails with a `Connection` error if the path cannot be opened as a
    /// valid database.
    pub async fn inspect(db_path: &str) -> ExplorerResult<SchemaReport> {
        let mut conn = connection::open_read_only(db_path).await?;
        let result = Self::build_report(&mut conn).await;
        connection::close(conn).await;
        result
    }

    async fn build_report(conn: &mut SqliteConnection) -> ExplorerResult<SchemaReport> {
        let names = Self::list_tables(conn).await?;
        let mut tables = Vec::with_capacity(names.len());
        for name in &names {
            tables.push(Self::describe_table(conn, name).await?);
        }

        debug!(table_count = tables.len(), "Schema introspection complete");
        Ok(SchemaReport { tables })
    }

    async fn list_tables(conn: &mut SqliteConnection) -> ExplorerResult<Vec<String>> {
        let rows = sqlx::query(LIST_TABLES).fetch_all(&mut *conn).await?;
        Ok(rows.iter().map(|row| row.get("name")).collect())
    }

    async fn describe_table(
        conn: &mut SqliteConnection,
        table_name: &str,
    ) -> ExplorerResult<TableSchema> {
        let quoted = quote_identifier(table_name);

        let pragma = format!("PRAGMA table_info({})", quoted);
        let column_rows = sqlx::query(&pragma).fetch_all(&mut *conn).await?;

        // Sample rows in whatever order the engine returns them; no ORDER BY.
        let sample_sql = format!("SELECT * FROM {} LIMIT {}", quoted, SAMPLE_ROW_LIMIT);
        let sample_rows = sqlx::query(&sample_sql).fetch_all(&mut *conn).await?;

        let columns = column_rows
            .iter()
            .map(|col| {
                let ordinal: i64 = col.get("cid");
                let samples = sample_rows
                    .iter()
                    .map(|row| types::decode_column(row, ordinal as usize))
                    .collect();

                ColumnInfo {
                    name: col.get("name"),
                    declared_type: col.get("type"),
                    samples,
                }
            })
            .collect();

        Ok(TableSchema {
            name: table_name.to_string(),
            columns,
        })
    }
}
