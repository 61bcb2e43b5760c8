//! [`JsonValue`] — the value tree the JSON encoders traverse.

use crate::DateTime;

/// Value union spanning everything the encoders can be handed.
///
/// The first eight variants are the categories JSON represents natively.
/// The remaining two have no native JSON representation: the plain
/// [`JsonEncoder`](crate::JsonEncoder) refuses both, and the
/// [`DateTimeEncoder`](crate::DateTimeEncoder) adds handling for the
/// datetime case only.
#[derive(Debug, Clone, PartialEq)]
pub enum JsonValue {
    Null,
    Bool(bool),
    /// Signed integer (fits in i64).
    Integer(i64),
    /// Unsigned integer above `i64::MAX`.
    UInteger(u64),
    /// Floating-point number.
    Float(f64),
    /// String.
    Str(String),
    /// Array of values.
    Array(Vec<JsonValue>),
    /// Object (ordered key-value pairs).
    Object(Vec<(String, JsonValue)>),
    /// Calendar date and time, optionally offset-aware.
    DateTime(DateTime),
    /// Raw binary data.
    Bytes(Vec<u8>),
}

impl JsonValue {
    /// Category name used in error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            JsonValue::Null => "null",
            JsonValue::Bool(_) => "bool",
            JsonValue::Integer(_) | JsonValue::UInteger(_) => "integer",
            JsonValue::Float(_) => "float",
            JsonValue::Str(_) => "string",
            JsonValue::Array(_) => "array",
            JsonValue::Object(_) => "object",
            JsonValue::DateTime(_) => "datetime",
            JsonValue::Bytes(_) => "bytes",
        }
    }

    /// Whether JSON can represent this value without a fallback hook.
    pub fn is_native(&self) -> bool {
        !matches!(self, JsonValue::DateTime(_) | JsonValue::Bytes(_))
    }
}

impl From<serde_json::Value> for JsonValue {
    fn from(v: serde_json::Value) -> Self {
        match v {
            serde_json::Value::Null => JsonValue::Null,
            serde_json::Value::Bool(b) => JsonValue::Bool(b),
            serde_json::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    JsonValue::Integer(i)
                } else if let Some(u) = n.as_u64() {
                    JsonValue::UInteger(u)
                } else {
                    JsonValue::Float(n.as_f64().unwrap_or(0.0))
                }
            }
            serde_json::Value::String(s) => JsonValue::Str(s),
            serde_json::Value::Array(arr) => {
                JsonValue::Array(arr.into_iter().map(JsonValue::from).collect())
            }
            serde_json::Value::Object(obj) => JsonValue::Object(
                obj.into_iter()
                    .map(|(k, v)| (k, JsonValue::from(v)))
                    .collect(),
            ),
        }
    }
}

impl From<DateTime> for JsonValue {
    fn from(dt: DateTime) -> Self {
        JsonValue::DateTime(dt)
    }
}
