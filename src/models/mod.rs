//! Data models for the SQLite Explorer MCP server.
//!
//! This module re-exports all model types used throughout the application.

pub mod query;
pub mod schema;

// Re-export commonly used types
pub use query::{FailureKind, QueryOutcome, SqlValue};
pub use schema::{ColumnInfo, NO_DATA_PLACEHOLDER, SchemaReport, TableSchema};
