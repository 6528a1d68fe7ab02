//! The holiday record returned by the API.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single holiday entry.
///
/// Holidays only come from decoding API responses; the client never builds or
/// edits them, so fields are exposed through accessors.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Holiday {
    date: String,
    name: String,
    national_holiday: bool,
}

impl Holiday {
    /// The holiday date as sent by the API (`YYYY-MM-DD`).
    pub fn date(&self) -> &str {
        &self.date
    }

    /// Display name of the holiday.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether this is a national holiday.
    pub fn is_national(&self) -> bool {
        self.national_holiday
    }

    /// Parses the date field, returning `None` if the API sent something unexpected.
    pub fn parsed_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.date, "%Y-%m-%d").ok()
    }
}
