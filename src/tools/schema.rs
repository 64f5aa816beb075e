//! Schema fetch tool.
//!
//! Implements the `fetch_schema` MCP tool: table names, columns, declared
//! types, and sample values for every table in a database file, rendered as
//! a multi-line text report.

use crate::db::SchemaInspector;
use crate::error::ExplorerResult;
use schemars::JsonSchema;
use serde::Deserialize;
use tracing::info;

/// Input for the fetch_schema tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct FetchSchemaInput {
    /// Path to the database file
    #[serde(rename = "DB_PATH")]
    pub db_path: String,
}

/// Handler for schema introspection.
pub struct SchemaToolHandler;

impl SchemaToolHandler {
    pub fn new() -> Self {
        Self
    }

    /// Handle the fetch_schema tool call.
    ///
    /// Connection failures propagate as errors: an unreadable database has
    /// no schema to report, and a partial report would be misleading.
    pub async fn fetch_schema(&self, input: FetchSchemaInput) -> ExplorerResult<String> {
        let report = SchemaInspector::inspect(&input.db_path).await?;

        info!(
            db_path = %input.db_path,
            table_count = report.tables.len(),
            "Schema fetched"
        );

        Ok(report.render())
    }
}

impl Default for SchemaToolHandler {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetch_schema_input_deserialization() {
        let json = r#"{"DB_PATH": "/tmp/test.db"}"#;
        let input: FetchSchemaInput = serde_json::from_str(json).unwrap();
        assert_eq!(input.db_path, "/tmp/test.db");
    }

    #[test]
    fn test_fetch_schema_input_rejects_unrenamed_field() {
        // The external contract uses the DB_PATH field name
        let json = r#"{"db_path": "/tmp/test.db"}"#;
        assert!(serde_json::from_str::<FetchSchemaInput>(json).is_err());
    }
}
