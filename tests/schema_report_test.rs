//! Integration tests for schema introspection.
//!
//! Tests verify that:
//! - Every table gets exactly one report block with one line per column
//! - Sample values are capped at 3 and follow row retrieval order
//! - Empty tables render the "No data" placeholder
//! - A nonexistent database path fails with a connection error

use sqlite_explorer_mcp::db::{QueryExecutor, SchemaInspector};
use sqlite_explorer_mcp::error::ExplorerError;
use sqlite_explorer_mcp::models::SqlValue;
use sqlite_explorer_mcp::tools::schema::{FetchSchemaInput, SchemaToolHandler};
use tempfile::NamedTempFile;

/// Create a SQLite database file seeded with the given statements.
async fn setup_db(statements: &[&str]) -> String {
    let temp_file = NamedTempFile::new().unwrap();
    // Keep the temp file alive - prevent deletion when function returns
    let db_path = temp_file
        .into_temp_path()
        .keep()
        .unwrap()
        .to_str()
        .unwrap()
        .to_string();

    for sql in statements {
        let outcome = QueryExecutor::execute(&db_path, sql).await;
        assert!(!outcome.is_failure(), "setup statement failed: {}", sql);
    }

    db_path
}

#[tokio::test]
async fn test_scenario_a_two_row_table() {
    let db_path = setup_db(&[
        "CREATE TABLE t (id INTEGER, name TEXT)",
        "INSERT INTO t VALUES (1, 'a')",
        "INSERT INTO t VALUES (2, 'b')",
    ])
    .await;

    let handler = SchemaToolHandler::new();
    let report = handler
        .fetch_schema(FetchSchemaInput { db_path })
        .await
        .unwrap();

    assert!(report.contains("Table: t"));
    assert!(report.contains("  - id (INTEGER) | Samples: 1, 2"));
    assert!(report.contains("  - name (TEXT) | Samples: a, b"));
}

#[tokio::test]
async fn test_schema_completeness() {
    let db_path = setup_db(&[
        "CREATE TABLE users (id INTEGER PRIMARY KEY, name TEXT, age INTEGER)",
        "CREATE TABLE orders (id INTEGER, user_id INTEGER)",
    ])
    .await;

    let report = SchemaInspector::inspect(&db_path).await.unwrap();

    assert_eq!(report.tables.len(), 2);
    let users = report.tables.iter().find(|t| t.name == "users").unwrap();
    assert_eq!(users.columns.len(), 3);
    let orders = report.tables.iter().find(|t| t.name == "orders").unwrap();
    assert_eq!(orders.columns.len(), 2);

    // Exactly one header block per table in the rendered report
    let rendered = report.render();
    assert_eq!(rendered.matches("Table: users").count(), 1);
    assert_eq!(rendered.matches("Table: orders").count(), 1);
}

#[tokio::test]
async fn test_sample_cap_at_three() {
    let db_path = setup_db(&[
        "CREATE TABLE big (n INTEGER)",
        "INSERT INTO big VALUES (1), (2), (3), (4), (5)",
    ])
    .await;

    let report = SchemaInspector::inspect(&db_path).await.unwrap();
    let column = &report.tables[0].columns[0];

    assert_eq!(column.samples.len(), 3);
    assert_eq!(
        column.samples,
        vec![
            SqlValue::Integer(1),
            SqlValue::Integer(2),
            SqlValue::Integer(3)
        ]
    );
}

#[tokio::test]
async fn test_fewer_rows_than_cap() {
    let db_path = setup_db(&["CREATE TABLE one (n INTEGER)", "INSERT INTO one VALUES (7)"]).await;

    let report = SchemaInspector::inspect(&db_path).await.unwrap();
    assert_eq!(report.tables[0].columns[0].samples.len(), 1);
}

#[tokio::test]
async fn test_empty_table_placeholder() {
    let db_path = setup_db(&["CREATE TABLE vacant (id INTEGER, label TEXT)"]).await;

    let report = SchemaInspector::inspect(&db_path).await.unwrap();
    for column in &report.tables[0].columns {
        assert!(column.samples.is_empty());
    }

    let rendered = report.render();
    assert!(rendered.contains("  - id (INTEGER) | Samples: No data"));
    assert!(rendered.contains("  - label (TEXT) | Samples: No data"));
}

#[tokio::test]
async fn test_null_and_mixed_storage_samples() {
    let db_path = setup_db(&[
        "CREATE TABLE mixed (v)",
        "INSERT INTO mixed VALUES (NULL)",
        "INSERT INTO mixed VALUES (1.5)",
        "INSERT INTO mixed VALUES ('x')",
    ])
    .await;

    let report = SchemaInspector::inspect(&db_path).await.unwrap();
    let samples = &report.tables[0].columns[0].samples;

    assert_eq!(
        samples,
        &vec![
            SqlValue::Null,
            SqlValue::Real(1.5),
            SqlValue::Text("x".to_string())
        ]
    );
    assert!(report.render().contains("| Samples: NULL, 1.5, x"));
}

#[tokio::test]
async fn test_blob_sample_rendered_as_base64() {
    let db_path = setup_db(&[
        "CREATE TABLE bin (data BLOB)",
        "INSERT INTO bin VALUES (x'68656c6c6f')",
    ])
    .await;

    let report = SchemaInspector::inspect(&db_path).await.unwrap();
    // "hello" in base64
    assert_eq!(
        report.tables[0].columns[0].samples,
        vec![SqlValue::Blob("aGVsbG8=".to_string())]
    );
}

#[tokio::test]
async fn test_database_without_tables_renders_empty_report() {
    let db_path = setup_db(&[]).await;
    // Force the file into a valid database by running a harmless statement
    let outcome = QueryExecutor::execute(&db_path, "SELECT 1").await;
    assert!(!outcome.is_failure());

    let report = SchemaInspector::inspect(&db_path).await.unwrap();
    assert!(report.tables.is_empty());
    assert_eq!(report.render(), "");
}

#[tokio::test]
async fn test_scenario_e_nonexistent_path_is_connection_error() {
    let err = SchemaInspector::inspect("/nonexistent/dir/missing.db")
        .await
        .unwrap_err();
    assert!(matches!(err, ExplorerError::Connection { .. }));
}

#[tokio::test]
async fn test_handler_propagates_connection_error() {
    let handler = SchemaToolHandler::new();
    let result = handler
        .fetch_schema(FetchSchemaInput {
            db_path: "/nonexistent/dir/missing.db".to_string(),
        })
        .await;
    assert!(result.is_err());
}

#[tokio::test]
async fn test_inspection_does_not_mutate_database() {
    let db_path = setup_db(&[
        "CREATE TABLE t (id INTEGER)",
        "INSERT INTO t VALUES (1), (2)",
    ])
    .await;

    SchemaInspector::inspect(&db_path).await.unwrap();

    let outcome = QueryExecutor::execute(&db_path, "SELECT COUNT(*) FROM t").await;
    match outcome {
        sqlite_explorer_mcp::models::QueryOutcome::Rows(rows) => {
            assert_eq!(rows[0][0], SqlValue::Integer(2));
        }
        other => panic!("expected rows, got {:?}", other),
    }
}
