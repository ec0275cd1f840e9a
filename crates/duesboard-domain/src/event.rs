//! Planned group events with optional day countdowns.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::common::{lenient_opt_string, lenient_string};

const EVENT_DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Event {
    #[serde(default, deserialize_with = "lenient_string")]
    pub title: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub date: String,
    #[serde(
        default,
        deserialize_with = "lenient_opt_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub description: Option<String>,
}

impl Event {
    pub fn parsed_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(self.date.trim(), EVENT_DATE_FORMAT).ok()
    }

    /// An event counts as upcoming strictly after today. Events with an
    /// unparseable date never count as upcoming.
    pub fn is_upcoming(&self, today: NaiveDate) -> bool {
        self.parsed_date().map(|date| date > today).unwrap_or(false)
    }

    /// Whole days between today and the event date.
    pub fn days_until(&self, today: NaiveDate) -> Option<i64> {
        self.parsed_date().map(|date| (date - today).num_days())
    }
}
