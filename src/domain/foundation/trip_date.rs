//! TripDate value object - one calendar day of a trip.

use chrono::{DateTime, Days, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use super::ValidationError;

const ISO_DATE: &str = "%Y-%m-%d";

/// A date-only calendar day, rendered as `YYYY-MM-DD`.
///
/// Ordering is chronological, which for ISO rendering also matches
/// lexicographic order of the serialized strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TripDate(NaiveDate);

impl TripDate {
    /// Wraps an existing calendar date.
    pub fn from_naive(date: NaiveDate) -> Self {
        Self(date)
    }

    /// Creates a date from year, month and day, if it exists on the calendar.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).map(Self)
    }

    /// Parses user input into a date-only value.
    ///
    /// Accepts `YYYY-MM-DD`, RFC 3339 timestamps and naive
    /// `YYYY-MM-DDTHH:MM[:SS]` timestamps. Timestamps keep the date as
    /// written; neither the time of day nor the offset moves the day.
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::empty_field("date"));
        }

        if let Ok(date) = NaiveDate::parse_from_str(trimmed, ISO_DATE) {
            return Ok(Self(date));
        }
        if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
            return Ok(Self(dt.date_naive()));
        }
        for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"] {
            if let Ok(dt) = NaiveDateTime::parse_from_str(trimmed, format) {
                return Ok(Self(dt.date()));
            }
        }

        Err(ValidationError::invalid_format(
            "date",
            format!("'{}' is not a calendar date (expected YYYY-MM-DD)", trimmed),
        ))
    }

    /// Returns the inner calendar date.
    pub fn as_naive(&self) -> NaiveDate {
        self.0
    }

    /// Returns the date `days` calendar days later, or `None` past the calendar's end.
    pub fn plus_days(&self, days: u64) -> Option<Self> {
        self.0.checked_add_days(Days::new(days)).map(Self)
    }
}

impl fmt::Display for TripDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(ISO_DATE))
    }
}

impl FromStr for TripDate {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for TripDate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for TripDate {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::parse(&raw).map_err(serde::de::Error::custom)
    }
}
