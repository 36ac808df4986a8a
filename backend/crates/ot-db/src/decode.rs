//! Column decoding shared by the repositories.
//!
//! Timestamps are stored as Unix milliseconds, ids as text and list fields as
//! JSON arrays. Anything that does not decode is reported as a corrupt row.

use crate::{DbError, Result as DbErrorResult};

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

pub(crate) fn timestamp(column: &str, millis: i64) -> DbErrorResult<DateTime<Utc>> {
    DateTime::from_timestamp_millis(millis)
        .ok_or_else(|| DbError::invalid(format!("Invalid timestamp in {}", column)))
}

pub(crate) fn uuid(column: &str, value: &str) -> DbErrorResult<Uuid> {
    Uuid::parse_str(value)
        .map_err(|e| DbError::invalid(format!("Invalid UUID in {}: {}", column, e)))
}

pub(crate) fn json_list(column: &'static str, value: &str) -> DbErrorResult<Vec<String>> {
    serde_json::from_str(value).map_err(|e| DbError::serialization(column, e))
}

pub(crate) fn to_json<T: Serialize>(column: &'static str, value: &T) -> DbErrorResult<String> {
    serde_json::to_string(value).map_err(|e| DbError::serialization(column, e))
}

pub(crate) fn unsigned(column: &str, value: i64) -> DbErrorResult<u32> {
    u32::try_from(value)
        .map_err(|_| DbError::invalid(format!("Out of range value in {}: {}", column, value)))
}

/// SQLite treats a negative LIMIT as "no limit".
pub(crate) fn limit(value: Option<u32>) -> i64 {
    value.map(i64::from).unwrap_or(-1)
}
