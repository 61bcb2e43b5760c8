//! Output buffering for the json-stamp encoders.

mod writer;

pub use writer::Writer;
