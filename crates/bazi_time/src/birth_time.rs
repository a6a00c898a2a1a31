//! Naive local birth date/time with minute resolution.
//!
//! Accepted input is `YYYY-MM-DD HH:MM` or `YYYY/MM/DD HH:MM` on a 24-hour
//! clock. Each pattern is tried in order and the first match wins.
//! Range validation of every component is delegated to chrono, so
//! `2024-13-40 25:99` is rejected rather than normalised.

use std::fmt::{Display, Formatter};
use std::str::FromStr;
use std::sync::OnceLock;

use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use regex::Regex;
use tracing::debug;

use crate::error::TimeError;

/// chrono format strings, tried in order.
pub const ACCEPTED_FORMATS: [&str; 2] = ["%Y-%m-%d %H:%M", "%Y/%m/%d %H:%M"];

/// Shape every input must have before chrono sees it.
///
/// chrono alone accepts signed or short years and a missing date/time
/// gap, none of which belong to the input grammar.
static INPUT_SHAPE: OnceLock<Regex> = OnceLock::new();

fn input_shape() -> &'static Regex {
    INPUT_SHAPE.get_or_init(|| {
        Regex::new(
            r"^(?:[0-9]{4}-[0-9]{1,2}-[0-9]{1,2}|[0-9]{4}/[0-9]{1,2}/[0-9]{1,2})\s+[0-9]{1,2}:[0-9]{1,2}$",
        )
        .expect("input shape regex must compile")
    })
}

/// Human-readable form of the accepted pattern, used in error messages.
pub const EXPECTED_PATTERN: &str = "YYYY-MM-DD HH:MM";

/// A validated birth date and clock time (naive, no timezone).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BirthTime {
    inner: NaiveDateTime,
}

impl BirthTime {
    /// Build from components. Returns `None` if any component is out of range.
    pub fn new(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> Option<Self> {
        let date = NaiveDate::from_ymd_opt(year, month, day)?;
        let time = NaiveTime::from_hms_opt(hour, minute, 0)?;
        Some(Self {
            inner: date.and_time(time),
        })
    }

    pub fn year(&self) -> i32 {
        self.inner.year()
    }

    /// Gregorian month, 1..=12.
    pub fn month(&self) -> u32 {
        self.inner.month()
    }

    pub fn day(&self) -> u32 {
        self.inner.day()
    }

    /// Clock hour, 0..=23.
    pub fn hour(&self) -> u32 {
        self.inner.hour()
    }

    pub fn minute(&self) -> u32 {
        self.inner.minute()
    }

    /// Calendar date component.
    pub fn date(&self) -> NaiveDate {
        self.inner.date()
    }
}

impl From<NaiveDateTime> for BirthTime {
    fn from(value: NaiveDateTime) -> Self {
        // Minute resolution: seconds never come from the accepted formats.
        let inner = value
            .with_second(0)
            .and_then(|v| v.with_nanosecond(0))
            .unwrap_or(value);
        Self { inner }
    }
}

impl Display for BirthTime {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.inner.format("%Y-%m-%d %H:%M"))
    }
}

impl FromStr for BirthTime {
    type Err = TimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_birth_time(s)
    }
}

/// Parse a raw input line into a [`BirthTime`].
///
/// Surrounding whitespace is ignored.
pub fn parse_birth_time(input: &str) -> Result<BirthTime, TimeError> {
    let trimmed = input.trim();
    if !input_shape().is_match(trimmed) {
        debug!(input = trimmed, "input does not have the date/time shape");
        return Err(TimeError::InvalidFormat {
            input: trimmed.to_string(),
        });
    }
    for fmt in ACCEPTED_FORMATS {
        match NaiveDateTime::parse_from_str(trimmed, fmt) {
            Ok(dt) => {
                debug!(input = trimmed, format = fmt, "parsed birth time");
                return Ok(BirthTime::from(dt));
            }
            Err(e) => debug!(input = trimmed, format = fmt, error = %e, "format did not match"),
        }
    }
    Err(TimeError::InvalidFormat {
        input: trimmed.to_string(),
    })
}
