//! Time-of-day and weekday primitives for the scheduling rules.
//!
//! The booking form sends start times as zero-padded 24-hour `"HH:MM"`
//! strings. The original rule engine compared those strings
//! lexicographically, which only works because the format is fixed-width.
//! [`TimeOfDay`] parses them into minutes since midnight instead, removing
//! the implicit contract while keeping every admit/deny outcome identical.

use chrono::{Datelike, NaiveDate};
use serde::Serialize;
use std::fmt;

use super::errors::ValidationError;

/// A wall-clock time of day, stored as minutes since midnight.
///
/// Construction goes through [`TimeOfDay::new`] or [`TimeOfDay::parse`]
/// only, so an out-of-range value cannot exist; no `Deserialize` is derived
/// for that reason.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub struct TimeOfDay(u16);

impl TimeOfDay {
    /// Creates a time of day from hour and minute components.
    ///
    /// Returns `None` if either component is out of range.
    pub fn new(hour: u8, minute: u8) -> Option<Self> {
        if hour >= 24 || minute >= 60 {
            return None;
        }
        Some(Self(hour as u16 * 60 + minute as u16))
    }

    /// Parses a zero-padded 24-hour `"HH:MM"` string.
    ///
    /// This is strict on purpose: the form contract guarantees the
    /// fixed-width format, and anything else is a caller bug surfaced as a
    /// validation result rather than a panic.
    pub fn parse(value: &str) -> Result<Self, ValidationError> {
        let invalid = || {
            ValidationError::invalid_format("start_time", "expected zero-padded 24-hour HH:MM")
        };

        let bytes = value.as_bytes();
        if bytes.len() != 5 || bytes[2] != b':' {
            return Err(invalid());
        }

        let hour: u8 = value[..2].parse().map_err(|_| invalid())?;
        let minute: u8 = value[3..].parse().map_err(|_| invalid())?;

        Self::new(hour, minute).ok_or_else(invalid)
    }

    /// Minutes since midnight.
    pub fn minutes(&self) -> u16 {
        self.0
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.0 / 60, self.0 % 60)
    }
}

/// Weekday index with Sunday = 0 through Saturday = 6.
///
/// The roster tables and the alternation rule are defined against this
/// numbering, matching the convention of the booking calendar.
pub fn weekday_index(date: NaiveDate) -> u8 {
    date.weekday().num_days_from_sunday() as u8
}

/// Short display name for a Sunday-based weekday index.
///
/// Out-of-range indices map to `"?"`; roster configuration only ever holds
/// 0..=6.
pub fn weekday_name(index: u8) -> &'static str {
    match index {
        0 => "Sun",
        1 => "Mon",
        2 => "Tue",
        3 => "Wed",
        4 => "Thu",
        5 => "Fri",
        6 => "Sat",
        _ => "?",
    }
}

/// Formats a set of weekday indices as a comma-separated list of day names.
pub fn weekday_list(days: &[u8]) -> String {
    days.iter()
        .map(|d| weekday_name(*d))
        .collect::<Vec<_>>()
        .join(", ")
}
