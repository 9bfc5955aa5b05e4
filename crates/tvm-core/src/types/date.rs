//! Date type for financial calculations.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Sub};
use std::str::FromStr;

use crate::error::{CoreError, CoreResult};

/// Human-readable format used for display and parsing, e.g. `Jan 15 2024`.
pub const DISPLAY_FORMAT: &str = "%b %d %Y";

/// ISO 8601 format, accepted as a fallback when parsing.
pub const ISO_FORMAT: &str = "%Y-%m-%d";

/// A calendar date for financial calculations.
///
/// This is a newtype wrapper around `chrono::NaiveDate`. Dates are shown
/// and parsed in the `Jan 15 2024` form; ISO strings are also accepted.
///
/// # Example
///
/// ```rust
/// use tvm_core::types::Date;
///
/// let date = Date::parse("Jan 15 2024").unwrap();
/// assert_eq!(date, Date::from_ymd(2024, 1, 15).unwrap());
/// assert_eq!(date.to_string(), "Jan 15 2024");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Date(NaiveDate);

impl Date {
    /// Creates a new date from year, month, and day.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidDate` if the date is invalid.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> CoreResult<Self> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Date)
            .ok_or_else(|| CoreError::invalid_date(format!("{year}-{month:02}-{day:02}")))
    }

    /// Parses a date written as `Jan 15 2024` or `2024-01-15`.
    ///
    /// Surrounding whitespace is ignored.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidDate` if neither format matches.
    pub fn parse(s: &str) -> CoreResult<Self> {
        let s = s.trim();
        NaiveDate::parse_from_str(s, DISPLAY_FORMAT)
            .or_else(|_| NaiveDate::parse_from_str(s, ISO_FORMAT))
            .map(Date)
            .map_err(|_| CoreError::invalid_date(format!("Cannot parse: {s}")))
    }

    /// Returns today's date.
    #[must_use]
    pub fn today() -> Self {
        Date(chrono::Local::now().date_naive())
    }

    /// Returns the year component.
    #[must_use]
    pub fn year(&self) -> i32 {
        self.0.year()
    }

    /// Returns the month component (1-12).
    #[must_use]
    pub fn month(&self) -> u32 {
        self.0.month()
    }

    /// Returns the day component (1-31).
    #[must_use]
    pub fn day(&self) -> u32 {
        self.0.day()
    }

    /// Adds a number of days to the date.
    #[must_use]
    pub fn add_days(&self, days: i64) -> Self {
        Date(self.0 + chrono::Duration::days(days))
    }

    /// Calculates the number of calendar days from `self` to `other`.
    ///
    /// Negative when `other` is earlier.
    #[must_use]
    pub fn days_between(&self, other: &Date) -> i64 {
        (other.0 - self.0).num_days()
    }

    /// Returns the date formatted as `Jan 15 2024`.
    #[must_use]
    pub fn to_display_string(&self) -> String {
        self.0.format(DISPLAY_FORMAT).to_string()
    }

    /// Returns the date formatted as `2024-01-15`.
    #[must_use]
    pub fn to_iso_string(&self) -> String {
        self.0.format(ISO_FORMAT).to_string()
    }

    /// Returns the underlying `NaiveDate`.
    #[must_use]
    pub fn as_naive_date(&self) -> NaiveDate {
        self.0
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DISPLAY_FORMAT))
    }
}

impl FromStr for Date {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Date::parse(s)
    }
}

impl From<NaiveDate> for Date {
    fn from(date: NaiveDate) -> Self {
        Date(date)
    }
}

impl From<Date> for NaiveDate {
    fn from(date: Date) -> Self {
        date.0
    }
}

impl Add<i64> for Date {
    type Output = Self;

    /// Adds days to a date.
    fn add(self, days: i64) -> Self::Output {
        self.add_days(days)
    }
}

impl Sub<i64> for Date {
    type Output = Self;

    /// Subtracts days from a date.
    fn sub(self, days: i64) -> Self::Output {
        self.add_days(-days)
    }
}

impl Sub<Date> for Date {
    type Output = i64;

    /// Returns the number of days between two dates.
    fn sub(self, other: Date) -> Self::Output {
        other.days_between(&self)
    }
}
