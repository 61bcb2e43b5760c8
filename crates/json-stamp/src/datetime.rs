//! [`DateTime`] — calendar date and time with optional UTC offset.

use std::fmt;

use time::{OffsetDateTime, PrimitiveDateTime, UtcOffset};

/// An immutable calendar date and time, optionally carrying a UTC offset.
///
/// Wraps a [`time::PrimitiveDateTime`] plus an optional
/// [`time::UtcOffset`]. A value without an offset renders as a naive
/// timestamp (`2023-05-01T12:30:00`); a value with one renders with the
/// offset suffix (`Z` for UTC, `±HH:MM` otherwise).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateTime {
    date_time: PrimitiveDateTime,
    offset: Option<UtcOffset>,
}

impl DateTime {
    /// A datetime with no timezone information.
    pub fn new(date_time: PrimitiveDateTime) -> Self {
        Self {
            date_time,
            offset: None,
        }
    }

    /// An offset-aware datetime.
    pub fn with_offset(date_time: PrimitiveDateTime, offset: UtcOffset) -> Self {
        Self {
            date_time,
            offset: Some(offset),
        }
    }

    pub fn date_time(&self) -> PrimitiveDateTime {
        self.date_time
    }

    pub fn offset(&self) -> Option<UtcOffset> {
        self.offset
    }

    /// Renders the value in the RFC 3339 date-time shape
    /// `YYYY-MM-DDTHH:MM:SS[.ffffff][Z|±HH:MM]`.
    ///
    /// The seconds field is always written. A non-zero sub-second component
    /// is written as exactly six microsecond digits; precision below one
    /// microsecond is truncated. UTC renders as `Z`; any other offset as
    /// `±HH:MM` (offsets are treated at whole-minute granularity, as the
    /// grammar requires).
    pub fn to_rfc3339(&self) -> String {
        let date = self.date_time.date();
        let time = self.date_time.time();
        let mut out = format!(
            "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}",
            date.year(),
            u8::from(date.month()),
            date.day(),
            time.hour(),
            time.minute(),
            time.second()
        );
        let micros = time.nanosecond() / 1_000;
        if micros != 0 {
            out.push_str(&format!(".{micros:06}"));
        }
        if let Some(offset) = self.offset {
            if offset.is_utc() {
                out.push('Z');
            } else {
                let (hours, minutes, _) = offset.as_hms();
                out.push(if offset.is_negative() { '-' } else { '+' });
                out.push_str(&format!(
                    "{:02}:{:02}",
                    hours.unsigned_abs(),
                    minutes.unsigned_abs()
                ));
            }
        }
        out
    }
}

impl From<PrimitiveDateTime> for DateTime {
    fn from(date_time: PrimitiveDateTime) -> Self {
        Self::new(date_time)
    }
}

impl From<OffsetDateTime> for DateTime {
    fn from(value: OffsetDateTime) -> Self {
        Self::with_offset(
            PrimitiveDateTime::new(value.date(), value.time()),
            value.offset(),
        )
    }
}

impl fmt::Display for DateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_rfc3339())
    }
}
