//! MCP service implementation using rmcp.
//!
//! This module defines the ExplorerService struct with the two database
//! tools exposed via the MCP protocol using the rmcp framework's macros.
//! The service is stateless: each tool call carries the database file path
//! it operates on and opens its own connection.

use crate::error::ExplorerError;
use crate::tools::query::{ExecuteSqlInput, ExecuteSqlOutput, QueryToolHandler};
use crate::tools::schema::{FetchSchemaInput, SchemaToolHandler};
use rmcp::Json;
use rmcp::{
    ErrorData as McpError, ServerHandler,
    handler::server::tool::ToolRouter,
    handler::server::wrapper::Parameters,
    model::{CallToolResult, Content, Implementation, ProtocolVersion, ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router,
};

#[derive(Clone)]
pub struct ExplorerService {
    /// Tool router for MCP tool dispatch (auto-generated)
    tool_router: ToolRouter<Self>,
}

impl ExplorerService {
    /// Create a new ExplorerService instance.
    pub fn new() -> Self {
        Self {
            tool_router: Self::tool_router(),
        }
    }
}

impl Default for ExplorerService {
    fn default() -> Self {
        Self::new()
    }
}

#[tool_router]
impl ExplorerService {
    #[tool(
        description = "Fetches the schema of the database (table names, columns, types, and sample values).\nReturns one block per table with one line per column in the form `name (type) | Samples: v1, v2, v3`.\nEmpty tables show `No data` as the sample."
    )]
    async fn fetch_schema(
        &self,
        Parameters(input): Parameters<FetchSchemaInput>,
    ) -> Result<CallToolResult, McpError> {
        let handler = SchemaToolHandler::new();
        let report = handler
            .fetch_schema(input)
            .await
            .map_err(|e: ExplorerError| McpError::from(e))?;
        Ok(CallToolResult::success(vec![Content::text(report)]))
    }

    #[tool(
        description = "Validates and executes an SQL query on the specified database.\nThe statement is plan-checked before execution; malformed SQL is rejected with a clear message and no side effect.\nReturns status `success` for write statements, `rows` with the result set for SELECT queries, or `failure` with the engine's error message."
    )]
    async fn validate_and_execute_sql_query(
        &self,
        Parameters(input): Parameters<ExecuteSqlInput>,
    ) -> Json<ExecuteSqlOutput> {
        let handler = QueryToolHandler::new();
        Json(handler.execute_sql(input).await)
    }
}

#[tool_handler]
impl ServerHandler for ExplorerService {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2025_03_26,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "sqlite-explorer-mcp".to_owned(),
                title: Some("SQLite Explorer".to_owned()),
                version: env!("CARGO_PKG_VERSION").to_owned(),
                icons: None,
                website_url: None,
            },
            instructions: Some(
                "Tools for exploring and querying SQLite database files.\n\
                \n\
                ## Workflow\n\
                1. Call `fetch_schema` with the database file path to learn tables, columns, \
                types, and sample values\n\
                2. Call `validate_and_execute_sql_query` with the SQL text and the same path\n\
                \n\
                ## Result Shape\n\
                `validate_and_execute_sql_query` always returns a value; check the `status` tag:\n\
                - `success`: the statement ran and has no rows to report (INSERT/UPDATE/DELETE/DDL)\n\
                - `rows`: a SELECT result set (possibly empty) with `row_count`\n\
                - `failure`: the message starts with `failure: ` followed by the engine's error\n\
                \n\
                ## Notes\n\
                - Each call opens its own connection to the given file; there is no session state\n\
                - The database file must already exist; a missing path is reported as a \
                connection failure"
                    .to_string(),
            ),
        }
    }
}
