//! Typed access to one decoded access-log line.
//!
//! Log lines are loosely typed JSON objects. Every field the reports care
//! about is optional, so each accessor pairs a field name with an explicit
//! default for the "absent" case and an explicit failure for the
//! "present but wrong type" case.

use chrono::{DateTime, FixedOffset};
use serde_json::{Map, Value};
use thiserror::Error;

pub const TIMESTAMP_FIELD: &str = "@timestamp";
pub const URL_FIELD: &str = "url";
pub const RESPONSE_TIME_FIELD: &str = "response_time";
pub const USER_AGENT_FIELD: &str = "http_user_agent";

/// Default used for every absent string field.
pub const UNKNOWN: &str = "unknown";

/// Fallback for offsets without a colon (`+0000`), which RFC 3339 rejects.
const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%z";

#[derive(Debug, Error)]
pub enum RecordError {
    #[error("log line is not a JSON object (found {found})")]
    NotAnObject { found: &'static str },

    #[error("field '{field}' must be {expected}, found {found}")]
    WrongType {
        field: &'static str,
        expected: &'static str,
        found: &'static str,
    },

    #[error("field '@timestamp' is missing")]
    MissingTimestamp,

    #[error("invalid timestamp '{value}': {source}")]
    InvalidTimestamp {
        value: String,
        #[source]
        source: chrono::ParseError,
    },
}

#[derive(Debug, Clone, Copy)]
pub struct LogRecord<'a> {
    fields: &'a Map<String, Value>,
}

impl<'a> LogRecord<'a> {
    pub fn from_value(value: &'a Value) -> Result<Self, RecordError> {
        match value {
            Value::Object(fields) => Ok(Self { fields }),
            other => Err(RecordError::NotAnObject {
                found: json_type(other),
            }),
        }
    }

    pub fn url(&self) -> String {
        self.str_or(URL_FIELD, UNKNOWN)
    }

    pub fn user_agent(&self) -> String {
        self.str_or(USER_AGENT_FIELD, UNKNOWN)
    }

    pub fn response_time(&self) -> Result<f64, RecordError> {
        self.number_or(RESPONSE_TIME_FIELD, 0.0)
    }

    pub fn timestamp(&self) -> Result<DateTime<FixedOffset>, RecordError> {
        let raw = match self.fields.get(TIMESTAMP_FIELD) {
            None => return Err(RecordError::MissingTimestamp),
            Some(Value::String(s)) => s,
            Some(other) => {
                return Err(RecordError::WrongType {
                    field: TIMESTAMP_FIELD,
                    expected: "a string",
                    found: json_type(other),
                });
            }
        };

        DateTime::parse_from_rfc3339(raw)
            .or_else(|_| DateTime::parse_from_str(raw, TIMESTAMP_FORMAT))
            .map_err(|source| RecordError::InvalidTimestamp {
                value: raw.clone(),
                source,
            })
    }

    /// Absent and `null` fall back to `default`. Non-string scalars are kept
    /// as their compact JSON text so the record still lands in a group.
    pub fn str_or(&self, field: &str, default: &str) -> String {
        match self.fields.get(field) {
            None | Some(Value::Null) => default.to_string(),
            Some(Value::String(s)) => s.clone(),
            Some(other) => other.to_string(),
        }
    }

    pub fn number_or(&self, field: &'static str, default: f64) -> Result<f64, RecordError> {
        match self.fields.get(field) {
            None => Ok(default),
            Some(Value::Number(n)) => n.as_f64().ok_or(RecordError::WrongType {
                field,
                expected: "a number",
                found: "an out-of-range number",
            }),
            Some(other) => Err(RecordError::WrongType {
                field,
                expected: "a number",
                found: json_type(other),
            }),
        }
    }
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
