//! JSON encoding with first-class datetime support.
//!
//! A plain JSON encoder plus one extension: datetime values are written as
//! RFC 3339 strings (`2023-05-01T12:30:00`). Every other value category
//! without a native JSON representation fails exactly as the plain encoder
//! fails.
//!
//! ```
//! use json_stamp::{DateTime, DateTimeEncoder, JsonValue};
//! use time::macros::datetime;
//!
//! let ts = DateTime::from(datetime!(2023-05-01 12:30:00));
//! let value = JsonValue::Object(vec![("ts".to_owned(), JsonValue::DateTime(ts))]);
//!
//! let mut encoder = DateTimeEncoder::new();
//! let json = encoder.encode_to_string(&value).unwrap();
//! assert_eq!(json, r#"{"ts":"2023-05-01T12:30:00"}"#);
//! ```

mod datetime;
pub mod json;
mod value;

pub use datetime::DateTime;
pub use json::{DateTimeEncoder, DateTimeFallback, EncodeError, Fallback, JsonEncoder, Reject};
pub use value::JsonValue;
