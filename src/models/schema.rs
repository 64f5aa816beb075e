//! Schema introspection models.
//!
//! These types are produced fresh on every `fetch_schema` call and discarded
//! after rendering; nothing here is cached between calls.

use crate::models::SqlValue;

/// Placeholder sample shown for every column of a table with no rows.
pub const NO_DATA_PLACEHOLDER: &str = "No data";

/// One column of a table: name, declared type, and up to 3 sample values.
///
/// The declared type is taken exactly as stored in the catalog; it may be
/// empty or non-standardized. Sample order follows the engine's row
/// retrieval order.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnInfo {
    pub name: String,
    pub declared_type: String,
    /// Empty when the table has no rows; rendered as the "No data"
    /// placeholder in that case.
    pub samples: Vec<SqlValue>,
}

impl ColumnInfo {
    /// Render this column as one report line.
    fn render(&self) -> String {
        let samples = if self.samples.is_empty() {
            NO_DATA_PLACEHOLDER.to_string()
        } else {
            self.samples
                .iter()
                .map(|v| v.to_string())
                .collect::<Vec<_>>()
                .join(", ")
        };
        format!("  - {} ({}) | Samples: {}", self.name, self.declared_type, samples)
    }
}

/// One table with its columns, in catalog order.
#[derive(Debug, Clone, PartialEq)]
pub struct TableSchema {
    pub name: String,
    pub columns: Vec<ColumnInfo>,
}

impl TableSchema {
    /// Render this table as a report block.
    fn render(&self) -> String {
        let columns = self
            .columns
            .iter()
            .map(ColumnInfo::render)
            .collect::<Vec<_>>()
            .join("\n");
        format!("Table: {}\nColumns:\n{}", self.name, columns)
    }
}

/// Full introspection result for one database file: all tables in the
/// catalog's native return order.
#[derive(Debug, Clone, PartialEq)]
pub struct SchemaReport {
    pub tables: Vec<TableSchema>,
}

impl SchemaReport {
    /// Render the human-readable multi-line schema report.
    pub fn render(&self) -> String {
        self.tables
            .iter()
            .map(TableSchema::render)
            .collect::<Vec<_>>()
            .join("\n")
    }
}
