//! Calendar date inputs and their normalized `YYYY-MM-DD` form.
//!
//! The holidays API only understands dates written as `YYYY-MM-DD`. Callers
//! may hand over either a string that is already in that form or a structured
//! date; [`CalendarDate`] captures both and [`normalize_date`] turns either
//! into the wire representation.

use std::fmt;

use chrono::{DateTime, Datelike, Local, NaiveDate, TimeZone};

/// A date argument accepted by the holidays client.
///
/// Text is forwarded untouched; it is the caller's job to supply a valid
/// `YYYY-MM-DD` string. Structured dates are formatted with zero-padded month
/// and day.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CalendarDate {
    /// A date string, expected to already be in `YYYY-MM-DD` form.
    Text(String),
    /// A structured calendar date.
    Date(NaiveDate),
}

impl CalendarDate {
    /// Creates a structured date for today according to the local clock.
    pub fn today() -> Self {
        Self::Date(Local::now().date_naive())
    }

    /// Returns `true` if this is the text variant.
    pub fn is_text(&self) -> bool {
        matches!(self, Self::Text(_))
    }

    /// Returns the structured date, if any.
    pub fn as_date(&self) -> Option<&NaiveDate> {
        match self {
            Self::Date(date) => Some(date),
            Self::Text(_) => None,
        }
    }

    /// Returns the `YYYY-MM-DD` representation sent to the API.
    ///
    /// The year is written as-is, month and day are padded to two digits.
    pub fn normalize(&self) -> String {
        match self {
            Self::Text(text) => text.clone(),
            Self::Date(date) => format!("{}-{:02}-{:02}", date.year(), date.month(), date.day()),
        }
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.normalize())
    }
}

impl From<&str> for CalendarDate {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for CalendarDate {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<&String> for CalendarDate {
    fn from(value: &String) -> Self {
        Self::Text(value.clone())
    }
}

impl From<NaiveDate> for CalendarDate {
    fn from(value: NaiveDate) -> Self {
        Self::Date(value)
    }
}

impl From<&NaiveDate> for CalendarDate {
    fn from(value: &NaiveDate) -> Self {
        Self::Date(*value)
    }
}

/// Uses the calendar fields of the datetime in its own time zone.
impl<Tz: TimeZone> From<DateTime<Tz>> for CalendarDate {
    fn from(value: DateTime<Tz>) -> Self {
        Self::Date(value.date_naive())
    }
}

/// Converts any supported date input into the `YYYY-MM-DD` string the API expects.
pub fn normalize_date(input: impl Into<CalendarDate>) -> String {
    input.into().normalize()
}
