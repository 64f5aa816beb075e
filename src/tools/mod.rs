//! MCP tool implementations.
//!
//! This module contains the two tool handlers:
//! - `schema`: fetch a database's schema report with sample values
//! - `query`: validate and execute an ad-hoc SQL statement

pub mod query;
pub mod schema;

pub use query::{ExecuteSqlInput, ExecuteSqlOutput, ExecuteStatus, QueryToolHandler};
pub use schema::{FetchSchemaInput, SchemaToolHandler};
