use std::fmt;

use serde_json::Value;

use crate::error::OperationError;

/// Current value of a query field.
///
/// Strings are kept as raw bytes because `rand_str_all` draws from the full
/// 0-255 range and the request line is written byte for byte.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Int(i64),
    Bytes(Vec<u8>),
}

impl FieldValue {
    /// Seed used for fields that have no `initial`.
    #[must_use]
    pub const fn empty() -> Self {
        FieldValue::Bytes(Vec::new())
    }

    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            FieldValue::Int(_) => "integer",
            FieldValue::Bytes(_) => "string",
        }
    }

    /// Appends the query-string form of the value (decimal for integers).
    pub fn write_query(&self, out: &mut Vec<u8>) {
        match self {
            FieldValue::Int(value) => out.extend_from_slice(value.to_string().as_bytes()),
            FieldValue::Bytes(bytes) => out.extend_from_slice(bytes),
        }
    }

    /// Converts an `initial` value from a test file.
    ///
    /// # Errors
    ///
    /// Returns an error for anything other than an integer or a string.
    pub fn from_json(value: &Value) -> Result<Self, OperationError> {
        match value {
            Value::Number(number) => {
                number
                    .as_i64()
                    .map(FieldValue::Int)
                    .ok_or_else(|| OperationError::UnsupportedInitial {
                        value: value.to_string(),
                    })
            }
            Value::String(text) => Ok(FieldValue::Bytes(text.as_bytes().to_vec())),
            Value::Null | Value::Bool(_) | Value::Array(_) | Value::Object(_) => {
                Err(OperationError::UnsupportedInitial {
                    value: value.to_string(),
                })
            }
        }
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        FieldValue::Int(value)
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Bytes(value.as_bytes().to_vec())
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Int(value) => write!(f, "{}", value),
            FieldValue::Bytes(bytes) => write!(f, "{}", bytes.escape_ascii()),
        }
    }
}
