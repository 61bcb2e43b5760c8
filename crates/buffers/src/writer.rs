//! Append-only byte buffer for building encoder output.

/// A growable byte buffer that encoders write UTF-8 output into.
///
/// One `Writer` is meant to be reused across encode calls: `reset` drops any
/// partial output left behind by a failed encode, and `flush` hands the
/// accumulated bytes to the caller while leaving the writer ready for the
/// next call.
///
/// # Example
///
/// ```
/// use json_stamp_buffers::Writer;
///
/// let mut writer = Writer::new();
/// writer.u8(b'[');
/// writer.ascii("1,2");
/// writer.u8(b']');
/// assert_eq!(writer.flush(), b"[1,2]");
/// ```
pub struct Writer {
    buf: Vec<u8>,
}

impl Default for Writer {
    fn default() -> Self {
        Self::new()
    }
}

impl Writer {
    /// Creates a new writer with a 4KB initial allocation.
    pub fn new() -> Self {
        Self::with_capacity(4 * 1024)
    }

    /// Creates a new writer with a custom initial allocation.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buf: Vec::with_capacity(capacity),
        }
    }

    /// Discards everything written since the last flush.
    pub fn reset(&mut self) {
        self.buf.clear();
    }

    /// Number of bytes written since the last flush.
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Returns the written bytes, leaving the writer empty.
    pub fn flush(&mut self) -> Vec<u8> {
        std::mem::take(&mut self.buf)
    }

    /// Writes a single byte.
    #[inline]
    pub fn u8(&mut self, val: u8) {
        self.buf.push(val);
    }

    /// Writes a byte slice.
    #[inline]
    pub fn buf(&mut self, bytes: &[u8]) {
        self.buf.extend_from_slice(bytes);
    }

    /// Writes an ASCII string.
    #[inline]
    pub fn ascii(&mut self, s: &str) {
        self.buf.extend_from_slice(s.as_bytes());
    }

    /// Writes a UTF-8 string. Returns the number of bytes written.
    pub fn utf8(&mut self, s: &str) -> usize {
        let bytes = s.as_bytes();
        self.buf.extend_from_slice(bytes);
        bytes.len()
    }
}
