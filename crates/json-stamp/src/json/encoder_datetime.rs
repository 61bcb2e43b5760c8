//! `DateTimeEncoder` — JSON encoder with datetime support.
//!
//! Extends the plain JSON encoder with exactly one more value category:
//! datetime values are written as RFC 3339 strings. Every other non-native
//! category still fails with the plain encoder's own error.

use crate::JsonValue;

use super::encoder::{Fallback, JsonEncoder, Reject};
use super::error::EncodeError;

/// Hook that lowers datetime values to RFC 3339 strings and delegates
/// everything else to [`Reject`] unchanged.
pub struct DateTimeFallback;

impl Fallback for DateTimeFallback {
    fn fallback(&self, value: &JsonValue) -> Result<JsonValue, EncodeError> {
        match value {
            JsonValue::DateTime(dt) => Ok(JsonValue::Str(dt.to_rfc3339())),
            other => Reject.fallback(other),
        }
    }
}

/// JSON encoder that writes datetime values as RFC 3339 strings.
///
/// Composition over the plain [`JsonEncoder`]: the wrapped encoder owns the
/// traversal and the output buffer; this type only supplies the hook.
pub struct DateTimeEncoder {
    pub json: JsonEncoder,
}

impl Default for DateTimeEncoder {
    fn default() -> Self {
        Self::new()
    }
}

impl DateTimeEncoder {
    pub fn new() -> Self {
        Self {
            json: JsonEncoder::new(),
        }
    }

    /// Encode a value tree to UTF-8 JSON bytes. Datetimes become RFC 3339
    /// strings; any other non-native value is an error.
    pub fn encode(&mut self, value: &JsonValue) -> Result<Vec<u8>, EncodeError> {
        self.json.encode_with(value, &DateTimeFallback)
    }

    /// Convenience: encode and return as a `String`.
    pub fn encode_to_string(&mut self, value: &JsonValue) -> Result<String, EncodeError> {
        let bytes = self.encode(value)?;
        Ok(String::from_utf8(bytes).unwrap_or_default())
    }
}
