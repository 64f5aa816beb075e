//! Database access layer.
//!
//! This module provides the two core operations over a SQLite database
//! file, plus their shared plumbing:
//! - Per-call connection handling (no pool, no reuse)
//! - Schema introspection with sample values
//! - Validated query execution with the three-way result contract
//! - Storage-class-based value decoding

pub mod connection;
pub mod executor;
pub mod inspector;
pub mod types;

pub use executor::QueryExecutor;
pub use inspector::{SAMPLE_ROW_LIMIT, SchemaInspector};

/// Quote an identifier for splicing into generated SQL.
///
/// Table names come from the database's own catalog and may contain spaces,
/// reserved words, or quote characters; double-quoting with `""` escaping
/// keeps generated statements intact for any of them.
pub fn quote_identifier(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quote_identifier_plain() {
        assert_eq!(quote_identifier("users"), "\"users\"");
    }

    #[test]
    fn test_quote_identifier_space_and_keyword() {
        assert_eq!(quote_identifier("my table"), "\"my table\"");
        assert_eq!(quote_identifier("order"), "\"order\"");
    }

    #[test]
    fn test_quote_identifier_embedded_quote() {
        assert_eq!(quote_identifier("a\"b"), "\"a\"\"b\"");
    }
}
