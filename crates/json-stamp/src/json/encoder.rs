//! `JsonEncoder` — plain JSON encoder (writes UTF-8 JSON to a Writer buffer).
//!
//! Handles the value categories JSON represents natively. Anything else is
//! routed through a [`Fallback`] hook; the default hook refuses every
//! non-native category, so plain `encode` fails on them the way a standard
//! JSON serializer does.

use json_stamp_buffers::Writer;

use crate::JsonValue;

use super::error::EncodeError;

/// Extension hook consulted once per non-native value the traversal meets.
///
/// The hook maps an unsupported value to a replacement the encoder continues
/// with. The replacement is encoded with the same hook still in effect, so
/// whatever the hook returns is quoted and escaped like any ordinary value.
/// Termination is the hook's contract: it must lower every value it claims
/// to something the encoder can eventually write natively.
pub trait Fallback {
    fn fallback(&self, value: &JsonValue) -> Result<JsonValue, EncodeError>;
}

/// The encoder's own default hook: every non-native category is an error.
pub struct Reject;

impl Fallback for Reject {
    fn fallback(&self, value: &JsonValue) -> Result<JsonValue, EncodeError> {
        Err(EncodeError::UnsupportedType(value.kind()))
    }
}

/// Plain JSON encoder.
pub struct JsonEncoder {
    pub writer: Writer,
}

impl Default for JsonEncoder {
    fn default() -> Self {
        Self::new()
    }
}

impl JsonEncoder {
    pub fn new() -> Self {
        Self {
            writer: Writer::new(),
        }
    }

    /// Encode a value tree to UTF-8 JSON bytes, refusing non-native values.
    pub fn encode(&mut self, value: &JsonValue) -> Result<Vec<u8>, EncodeError> {
        self.encode_with(value, &Reject)
    }

    /// Convenience: encode and return as a `String`.
    pub fn encode_to_string(&mut self, value: &JsonValue) -> Result<String, EncodeError> {
        let bytes = self.encode(value)?;
        Ok(String::from_utf8(bytes).unwrap_or_default())
    }

    /// Encode a value tree, routing non-native values through `hook`.
    pub fn encode_with<F: Fallback>(
        &mut self,
        value: &JsonValue,
        hook: &F,
    ) -> Result<Vec<u8>, EncodeError> {
        self.writer.reset();
        self.write_any(value, hook)?;
        Ok(self.writer.flush())
    }

    pub fn write_any<F: Fallback>(
        &mut self,
        value: &JsonValue,
        hook: &F,
    ) -> Result<(), EncodeError> {
        match value {
            JsonValue::Null => {
                self.write_null();
                Ok(())
            }
            JsonValue::Bool(b) => {
                self.write_boolean(*b);
                Ok(())
            }
            JsonValue::Integer(i) => {
                self.write_integer(*i);
                Ok(())
            }
            JsonValue::UInteger(u) => {
                self.write_u_integer(*u);
                Ok(())
            }
            JsonValue::Float(f) => {
                self.write_float(*f);
                Ok(())
            }
            JsonValue::Str(s) => {
                self.write_str(s);
                Ok(())
            }
            JsonValue::Array(arr) => self.write_arr(arr, hook),
            JsonValue::Object(obj) => self.write_obj(obj, hook),
            other => {
                let replacement = hook.fallback(other)?;
                self.write_any(&replacement, hook)
            }
        }
    }

    pub fn write_null(&mut self) {
        self.writer.buf(b"null");
    }

    pub fn write_boolean(&mut self, b: bool) {
        if b {
            self.writer.buf(b"true");
        } else {
            self.writer.buf(b"false");
        }
    }

    pub fn write_integer(&mut self, int: i64) {
        self.writer.ascii(&int.to_string());
    }

    pub fn write_u_integer(&mut self, uint: u64) {
        self.writer.ascii(&uint.to_string());
    }

    pub fn write_float(&mut self, float: f64) {
        self.writer.ascii(&format_float(float));
    }

    /// Write a JSON-encoded string (with escaping).
    pub fn write_str(&mut self, s: &str) {
        let json = serde_json::to_string(s).unwrap_or_else(|_| "\"\"".to_string());
        self.writer.buf(json.as_bytes());
    }

    pub fn write_arr<F: Fallback>(
        &mut self,
        arr: &[JsonValue],
        hook: &F,
    ) -> Result<(), EncodeError> {
        self.writer.u8(b'[');
        for (i, item) in arr.iter().enumerate() {
            if i > 0 {
                self.writer.u8(b',');
            }
            self.write_any(item, hook)?;
        }
        self.writer.u8(b']');
        Ok(())
    }

    pub fn write_obj<F: Fallback>(
        &mut self,
        obj: &[(String, JsonValue)],
        hook: &F,
    ) -> Result<(), EncodeError> {
        if obj.is_empty() {
            self.writer.buf(b"{}");
            return Ok(());
        }
        self.writer.u8(b'{');
        for (i, (key, val)) in obj.iter().enumerate() {
            if i > 0 {
                self.writer.u8(b',');
            }
            self.write_str(key);
            self.writer.u8(b':');
            self.write_any(val, hook)?;
        }
        self.writer.u8(b'}');
        Ok(())
    }
}

fn format_float(f: f64) -> String {
    if f.is_nan() {
        "null".to_string()
    } else if f.is_infinite() {
        if f > 0.0 {
            "1e308".to_string()
        } else {
            "-1e308".to_string()
        }
    } else if f.fract() == 0.0 && f.abs() < 1e15 {
        format!("{}", f as i64)
    } else {
        // Rust's default float repr is the shortest round-trip representation
        format!("{}", f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn encode(value: &JsonValue) -> String {
        JsonEncoder::new().encode_to_string(value).expect("encode")
    }

    #[test]
    fn writes_primitives() {
        assert_eq!(encode(&JsonValue::Null), "null");
        assert_eq!(encode(&JsonValue::Bool(false)), "false");
        assert_eq!(encode(&JsonValue::Integer(-42)), "-42");
        assert_eq!(
            encode(&JsonValue::UInteger(u64::MAX)),
            "18446744073709551615"
        );
        assert_eq!(encode(&JsonValue::Float(1.5)), "1.5");
        assert_eq!(encode(&JsonValue::Float(3.0)), "3");
    }

    #[test]
    fn escapes_strings() {
        assert_eq!(
            encode(&JsonValue::Str("say \"hi\"\n".into())),
            r#""say \"hi\"\n""#
        );
    }

    #[test]
    fn writes_empty_containers() {
        assert_eq!(encode(&JsonValue::Array(vec![])), "[]");
        assert_eq!(encode(&JsonValue::Object(vec![])), "{}");
    }

    #[test]
    fn refuses_non_native_values() {
        let err = JsonEncoder::new()
            .encode(&JsonValue::Bytes(vec![1, 2]))
            .unwrap_err();
        assert_eq!(err, EncodeError::UnsupportedType("bytes"));
    }

    #[test]
    fn custom_hook_replacement_is_re_encoded() {
        struct BytesAsArray;
        impl Fallback for BytesAsArray {
            fn fallback(&self, value: &JsonValue) -> Result<JsonValue, EncodeError> {
                match value {
                    JsonValue::Bytes(b) => Ok(JsonValue::Array(
                        b.iter().map(|&b| JsonValue::Integer(b as i64)).collect(),
                    )),
                    other => Reject.fallback(other),
                }
            }
        }

        let mut encoder = JsonEncoder::new();
        let value = JsonValue::Array(vec![JsonValue::Bytes(vec![1, 2, 3]), JsonValue::Null]);
        let bytes = encoder.encode_with(&value, &BytesAsArray).expect("encode");
        assert_eq!(bytes, b"[[1,2,3],null]");
    }
}
