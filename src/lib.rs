//! SQLite Explorer MCP Server Library
//!
//! This library provides MCP (Model Context Protocol) tools for AI assistants
//! to inspect the schema of a SQLite database file and run validated ad-hoc
//! SQL queries against it.

pub mod config;
pub mod db;
pub mod error;
pub mod mcp;
pub mod models;
pub mod tools;
pub mod transport;

pub use config::Config;
pub use error::{ExplorerError, ExplorerResult};
pub use mcp::ExplorerService;
