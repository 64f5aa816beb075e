//! Per-call connection handling.
//!
//! Every tool call opens its own `SqliteConnection` and releases it before
//! returning; there is no pool and no connection reuse. The connection is
//! closed on every exit path: explicitly via [`close`] on the happy path,
//! and by drop on early error returns.

use crate::error::{ExplorerError, ExplorerResult, engine_message};
use sqlx::ConnectOptions;
use sqlx::sqlite::{SqliteConnectOptions, SqliteConnection};
use tracing::debug;

/// Open a read-write connection to the database file at `db_path`.
///
/// The file must already exist; a missing or unreadable path surfaces as a
/// `Connection` error carrying the driver's message.
pub async fn open(db_path: &str) -> ExplorerResult<SqliteConnection> {
    open_with(db_path, false).await
}

/// Open a read-only connection to the database file at `db_path`.
///
/// Used by schema introspection, which never mutates the target database.
pub async fn open_read_only(db_path: &str) -> ExplorerResult<SqliteConnection> {
    open_with(db_path, true).await
}

async fn open_with(db_path: &str, read_only: bool) -> ExplorerResult<SqliteConnection> {
    let path = db_path.trim();
    if path.is_empty() {
        return Err(ExplorerError::invalid_input("db_path must not be empty"));
    }

    let options = SqliteConnectOptions::new()
        .filename(path)
        .create_if_missing(false)
        .read_only(read_only);

    let conn = options
        .connect()
        .await
        .map_err(|e| ExplorerError::connection(engine_message(&e)))?;

    debug!(path = %path, read_only = read_only, "Opened database connection");
    Ok(conn)
}

/// Gracefully close a connection, logging (not propagating) close failures.
///
/// The operation's result has already been produced by the time this runs;
/// a close error must not overwrite it.
pub async fn close(conn: SqliteConnection) {
    use sqlx::Connection;
    if let Err(e) = conn.close().await {
        debug!(error = %e, "Error while closing database connection");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_open_rejects_empty_path() {
        let err = open("").await.unwrap_err();
        assert!(matches!(err, ExplorerError::InvalidInput { .. }));

        let err = open("   ").await.unwrap_err();
        assert!(matches!(err, ExplorerError::InvalidInput { .. }));
    }

    #[tokio::test]
    async fn test_open_missing_file_is_connection_error() {
        let err = open("/nonexistent/path/to/missing.db").await.unwrap_err();
        assert!(matches!(err, ExplorerError::Connection { .. }));
    }

    #[tokio::test]
    async fn test_open_read_only_missing_file_is_connection_error() {
        let err = open_read_only("/nonexistent/path/to/missing.db")
            .await
            .unwrap_err();
        assert!(matches!(err, ExplorerError::Connection { .. }));
    }
}
