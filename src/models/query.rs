//! Query result models.
//!
//! `QueryOutcome` is the three-way result contract of the query executor:
//! exactly one of `Empty`, `Rows`, or `Failure` per call. Callers match on
//! it exhaustively instead of inspecting the shape of a loosely-typed value.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single SQLite scalar value, decoded from the engine's storage class.
///
/// BLOB values are carried as their base64 encoding so they stay printable
/// in reports and JSON output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(untagged)]
pub enum SqlValue {
    /// SQL NULL
    Null,
    /// INTEGER storage class
    Integer(i64),
    /// REAL storage class
    Real(f64),
    /// TEXT storage class
    Text(String),
    /// BLOB storage class, base64-encoded
    Blob(String),
}

impl fmt::Display for SqlValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => write!(f, "NULL"),
            Self::Integer(v) => write!(f, "{}", v),
            Self::Real(v) => write!(f, "{}", v),
            Self::Text(v) => write!(f, "{}", v),
            Self::Blob(v) => write!(f, "{}", v),
        }
    }
}

/// Which stage of a query call failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// The database file could not be opened.
    Connection,
    /// The statement was rejected at plan time, before any side effect.
    Validation,
    /// The statement planned successfully but failed during execution.
    Execution,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Connection => write!(f, "connection"),
            Self::Validation => write!(f, "validation"),
            Self::Execution => write!(f, "execution"),
        }
    }
}

/// Result of one query executor call.
///
/// The variants are mutually exclusive and exhaustive: a successful write
/// is `Empty` (and nothing else), a successful read is `Rows` (possibly
/// with zero rows), and every captured failure is `Failure`.
#[derive(Debug, Clone, PartialEq)]
pub enum QueryOutcome {
    /// Statement executed with no rows to report (INSERT, UPDATE, DELETE, DDL).
    Empty,
    /// Row set from a read query, values in column order.
    Rows(Vec<Vec<SqlValue>>),
    /// Captured failure with the stage it occurred at and the engine's
    /// native error text.
    Failure { kind: FailureKind, message: String },
}

impl QueryOutcome {
    /// Create a failure outcome.
    pub fn failure(kind: FailureKind, message: impl Into<String>) -> Self {
        Self::Failure {
            kind,
            message: message.into(),
        }
    }

    /// True if this outcome is the failure variant.
    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Failure { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sql_value_display() {
        assert_eq!(SqlValue::Null.to_string(), "NULL");
        assert_eq!(SqlValue::Integer(42).to_string(), "42");
        assert_eq!(SqlValue::Real(1.5).to_string(), "1.5");
        assert_eq!(SqlValue::Text("hello".into()).to_string(), "hello");
        assert_eq!(SqlValue::Blob("aGk=".into()).to_string(), "aGk=");
    }

    #[test]
    fn test_sql_value_serializes_untagged() {
        assert_eq!(serde_json::to_string(&SqlValue::Null).unwrap(), "null");
        assert_eq!(serde_json::to_string(&SqlValue::Integer(1)).unwrap(), "1");
        assert_eq!(
            serde_json::to_string(&SqlValue::Text("a".into())).unwrap(),
            "\"a\""
        );
    }

    #[test]
    fn test_outcome_failure_constructor() {
        let outcome = QueryOutcome::failure(FailureKind::Validation, "no such table: x");
        assert!(outcome.is_failure());
        match outcome {
            QueryOutcome::Failure { kind, message } => {
                assert_eq!(kind, FailureKind::Validation);
                assert_eq!(message, "no such table: x");
            }
            _ => unreachable!(),
        }
    }

    #[test]
    fn test_empty_and_rows_are_not_failure() {
        assert!(!QueryOutcome::Empty.is_failure());
        assert!(!QueryOutcome::Rows(Vec::new()).is_failure());
    }
}
