//! JSON encoding for [`JsonValue`](crate::JsonValue) trees.
//!
//! Two encoders share one traversal:
//! - [`JsonEncoder`] handles the categories JSON represents natively and
//!   routes the rest through its [`Fallback`] hook (refused by default).
//! - [`DateTimeEncoder`] supplies a hook that writes datetime values as
//!   RFC 3339 strings and leaves every other refusal untouched.

pub mod encoder;
pub mod encoder_datetime;
pub mod error;

pub use encoder::{Fallback, JsonEncoder, Reject};
pub use encoder_datetime::{DateTimeEncoder, DateTimeFallback};
pub use error::EncodeError;
