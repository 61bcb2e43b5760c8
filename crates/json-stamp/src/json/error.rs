//! JSON encode error type.

use thiserror::Error;

/// Errors that can occur while encoding a value tree to JSON.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EncodeError {
    /// The value category has no JSON representation and no hook claimed it.
    #[error("value of type {0} is not JSON serializable")]
    UnsupportedType(&'static str),
}
