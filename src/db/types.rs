//! SQLite value decoding.
//!
//! Row values are decoded into [`SqlValue`] by inspecting each value's
//! actual storage class rather than the column's declared type: SQLite's
//! type discipline allows any value in any column, so the declared type is
//! informational only.

use crate::models::SqlValue;
use base64::{Engine as _, engine::general_purpose::STANDARD};
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, TypeInfo, ValueRef};

/// Decode a full row into values in column order.
pub fn decode_row(row: &SqliteRow) -> Vec<SqlValue> {
    (0..row.len()).map(|idx| decode_column(row, idx)).collect()
}

/// Decode the value at `idx` according to its storage class.
pub fn decode_column(row: &SqliteRow, idx: usize) -> SqlValue {
    let raw = match row.try_get_raw(idx) {
        Ok(raw) => raw,
        Err(_) => return SqlValue::Null,
    };
    if raw.is_null() {
        return SqlValue::Null;
    }

    let storage_class = raw.type_info().name().to_string();
    match storage_class.as_str() {
        "INTEGER" | "BOOLEAN" => row
            .try_get::<i64, _>(idx)
            .map(SqlValue::Integer)
            .unwrap_or(SqlValue::Null),
        "REAL" => row
            .try_get::<f64, _>(idx)
            .map(SqlValue::Real)
            .unwrap_or(SqlValue::Null),
        "TEXT" => row
            .try_get::<String, _>(idx)
            .map(SqlValue::Text)
            .unwrap_or(SqlValue::Null),
        "BLOB" => row
            .try_get::<Vec<u8>, _>(idx)
            .map(|bytes| SqlValue::Blob(encode_blob(&bytes)))
            .unwrap_or(SqlValue::Null),
        _ => decode_fallback(row, idx),
    }
}

/// A non-standard storage class name (NUMERIC, DATETIME, ...): try the
/// concrete types in order of likelihood.
fn decode_fallback(row: &SqliteRow, idx: usize) -> SqlValue {
    if let Ok(v) = row.try_get::<i64, _>(idx) {
        return SqlValue::Integer(v);
    }
    if let Ok(v) = row.try_get::<f64, _>(idx) {
        return SqlValue::Real(v);
    }
    if let Ok(v) = row.try_get::<String, _>(idx) {
        return SqlValue::Text(v);
    }
    if let Ok(v) = row.try_get::<Vec<u8>, _>(idx) {
        return SqlValue::Blob(encode_blob(&v));
    }
    SqlValue::Null
}

/// Encode BLOB bytes as base64 for display and JSON transport.
pub fn encode_blob(bytes: &[u8]) -> String {
    STANDARD.encode(bytes)
}
