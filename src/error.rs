//! Error types for the SQLite Explorer MCP server.
//!
//! All errors are defined with `thiserror` and carry the engine's own
//! message where one exists, so callers see the same diagnostics the
//! database would print.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExplorerError {
    #[error("Connection failed: {message}")]
    Connection { message: String },

    #[error("Validation failed: {message}")]
    Validation { message: String },

    #[error("Execution failed: {message}")]
    Execution { message: String },

    #[error("Invalid input: {message}")]
    InvalidInput { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl ExplorerError {
    /// Create a connection error.
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection {
            message: message.into(),
        }
    }

    /// Create a validation error (statement rejected at plan time).
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Create an execution error (statement failed while running).
    pub fn execution(message: impl Into<String>) -> Self {
        Self::Execution {
            message: message.into(),
        }
    }

    /// Create an invalid input error.
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: message.into(),
        }
    }

    /// Create an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// The bare message, without the variant prefix added by `Display`.
    pub fn message(&self) -> &str {
        match self {
            Self::Connection { message }
            | Self::Validation { message }
            | Self::Execution { message }
            | Self::InvalidInput { message }
            | Self::Internal { message } => message,
        }
    }
}

/// Extract the engine's own diagnostic from a sqlx error.
///
/// For database-level failures this is the SQLite message ("no such table:
/// missing", "near \"SELEKT\": syntax error", ...); other failures fall
/// back to the sqlx display form.
pub fn engine_message(err: &sqlx::Error) -> String {
    match err {
        sqlx::Error::Database(db_err) => db_err.message().to_string(),
        other => other.to_string(),
    }
}

impl From<sqlx::Error> for ExplorerError {
    fn from(err: sqlx::Error) -> Self {
        match &err {
            sqlx::Error::Configuration(_) | sqlx::Error::Io(_) => {
                ExplorerError::connection(engine_message(&err))
            }
            sqlx::Error::Database(_) => ExplorerError::execution(engine_message(&err)),
            sqlx::Error::ColumnIndexOutOfBounds { .. }
            | sqlx::Error::ColumnDecode { .. }
            | sqlx::Error::Decode(_) => ExplorerError::internal(engine_message(&err)),
            _ => ExplorerError::internal(engine_message(&err)),
        }
    }
}

/// Result type alias for explorer operations.
pub type ExplorerResult<T> = Result<T, ExplorerError>;

/// Convert ExplorerError to MCP ErrorData for semantic error categorization.
impl From<ExplorerError> for rmcp::ErrorData {
    fn from(err: ExplorerError) -> Self {
        match &err {
            ExplorerError::Validation { .. } | ExplorerError::InvalidInput { .. } => {
                rmcp::ErrorData::invalid_params(err.to_string(), None)
            }
            ExplorerError::Connection { .. }
            | ExplorerError::Execution { .. }
            | ExplorerError::Internal { .. } => {
                rmcp::ErrorData::internal_error(err.to_string(), None)
            }
        }
    }
}
