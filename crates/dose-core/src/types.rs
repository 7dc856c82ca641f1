//! Core types: dose timestamps and calculation results.
//!
//! Timestamps are wall-clock local times with no timezone, entered and
//! persisted as `yyyy-MM-dd HH:mm` text.

use chrono::{NaiveDate, NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::constants::{MILLIS_PER_HOUR, NEGLIGIBLE_PERCENT, TIMESTAMP_FORMAT, TIMESTAMP_LEN};
use crate::error::TimestampError;

/// A point in local wall-clock time, at minute precision when parsed.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(try_from = "String", into = "String")]
pub struct DoseTime(pub NaiveDateTime);

impl DoseTime {
    /// Parse a timestamp in the strict `yyyy-MM-dd HH:mm` pattern.
    ///
    /// The input must be exactly 16 characters with zero-padded fields.
    /// Surrounding whitespace is rejected, not trimmed. Fields are range
    /// checked one by one: a day past the end of its month resolves to the
    /// month's last day, and `24:00` is midnight at the start of the next
    /// day.
    ///
    /// # Examples
    ///
    /// ```
    /// use dose_core::types::DoseTime;
    /// let t = DoseTime::parse("2024-03-01 08:30").unwrap();
    /// assert_eq!(t.to_string(), "2024-03-01 08:30");
    /// assert!(DoseTime::parse("2024-3-1 8:30").is_err());
    /// let t = DoseTime::parse("2024-04-31 10:00").unwrap();
    /// assert_eq!(t.to_string(), "2024-04-30 10:00");
    /// ```
    pub fn parse(input: &str) -> Result<Self, TimestampError> {
        if !has_timestamp_shape(input) {
            return Err(TimestampError::WrongShape(input.to_string()));
        }
        let out_of_range = || TimestampError::OutOfRange(input.to_string());
        let field = |range: std::ops::Range<usize>| {
            input.as_bytes()[range]
                .iter()
                .fold(0u32, |acc, b| acc * 10 + u32::from(b - b'0'))
        };
        let (year, month, day) = (field(0..4), field(5..7), field(8..10));
        let (hour, minute) = (field(11..13), field(14..16));

        if year == 0
            || !(1..=12).contains(&month)
            || !(1..=31).contains(&day)
            || hour > 24
            || minute > 59
            || (hour == 24 && minute != 0)
        {
            return Err(out_of_range());
        }

        // Walk back from an oversized day to the month's last day.
        let date = (1..=day)
            .rev()
            .find_map(|d| NaiveDate::from_ymd_opt(year as i32, month, d))
            .ok_or_else(out_of_range)?;
        let resolved = if hour == 24 {
            date.succ_opt().and_then(|d| d.and_hms_opt(0, 0, 0))
        } else {
            date.and_hms_opt(hour, minute, 0)
        };
        resolved.map(Self).ok_or_else(out_of_range)
    }

    /// Drop seconds and sub-second precision.
    pub fn truncated_to_minute(self) -> Self {
        self.0
            .with_second(0)
            .and_then(|t| t.with_nanosecond(0))
            .map(Self)
            .unwrap_or(self)
    }

    /// Fractional hours from `earlier` to `self`, at millisecond precision.
    ///
    /// Negative when `earlier` is after `self`.
    pub fn hours_since(&self, earlier: &DoseTime) -> f64 {
        (self.0 - earlier.0).num_milliseconds() as f64 / MILLIS_PER_HOUR
    }
}

/// Byte-level check of the `DDDD-DD-DD DD:DD` shape.
fn has_timestamp_shape(input: &str) -> bool {
    let bytes = input.as_bytes();
    if bytes.len() != TIMESTAMP_LEN {
        return false;
    }
    bytes.iter().enumerate().all(|(i, &b)| match i {
        4 | 7 => b == b'-',
        10 => b == b' ',
        13 => b == b':',
        _ => b.is_ascii_digit(),
    })
}

impl fmt::Display for DoseTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(TIMESTAMP_FORMAT))
    }
}

impl FromStr for DoseTime {
    type Err = TimestampError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for DoseTime {
    type Error = TimestampError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse(&s)
    }
}

impl From<DoseTime> for String {
    fn from(t: DoseTime) -> Self {
        t.to_string()
    }
}

impl From<NaiveDateTime> for DoseTime {
    fn from(dt: NaiveDateTime) -> Self {
        Self(dt)
    }
}

/// Outcome of a decay calculation.
///
/// A future dose is its own variant so that it can never be mistaken for a
/// small percentage.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum Remaining {
    /// Percentage of the dose still present, in `[0, 100]`.
    Percentage(f64),
    /// The dose timestamp is after the evaluation time.
    FutureDose,
}

impl Remaining {
    pub fn percentage(&self) -> Option<f64> {
        match self {
            Self::Percentage(p) => Some(*p),
            Self::FutureDose => None,
        }
    }

    /// True for a percentage below [`NEGLIGIBLE_PERCENT`].
    pub fn is_negligible(&self) -> bool {
        matches!(self, Self::Percentage(p) if *p < NEGLIGIBLE_PERCENT)
    }
}
