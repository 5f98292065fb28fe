//! Calendar date stored as separate day/month/year fields.

use chrono::{Datelike, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Date triple as found on stored documents. Any part may be missing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryDate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub day: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub month: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<i64>,
}

/// Fully specified date supplied by a client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarDate {
    pub day: i64,
    pub month: i64,
    pub year: i64,
}

impl CalendarDate {
    /// Current date in UTC.
    pub fn today() -> Self {
        Self::from(Utc::now().date_naive())
    }

    /// Check the parts are in range. Does not reject e.g. 31 February.
    pub fn validate(&self) -> Result<(), String> {
        if !(1..=31).contains(&self.day) {
            return Err(format!("date.day must be between 1 and 31, got {}", self.day));
        }
        if !(1..=12).contains(&self.month) {
            return Err(format!(
                "date.month must be between 1 and 12, got {}",
                self.month
            ));
        }
        if !(1..=9999).contains(&self.year) {
            return Err(format!(
                "date.year must be between 1 and 9999, got {}",
                self.year
            ));
        }
        Ok(())
    }
}

impl From<NaiveDate> for CalendarDate {
    fn from(date: NaiveDate) -> Self {
        Self {
            day: i64::from(date.day()),
            month: i64::from(date.month()),
            year: i64::from(date.year()),
        }
    }
}

impl From<CalendarDate> for EntryDate {
    fn from(date: CalendarDate) -> Self {
        Self {
            day: Some(date.day),
            month: Some(date.month),
            year: Some(date.year),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_naive_date() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 9).unwrap();
        let calendar = CalendarDate::from(date);
        assert_eq!(
            calendar,
            CalendarDate {
                day: 9,
                month: 3,
                year: 2024
            }
        );
    }

    #[test]
    fn test_validate_ranges() {
        let ok = CalendarDate {
            day: 31,
            month: 12,
            year: 2023,
        };
        assert!(ok.validate().is_ok());

        let bad_day = CalendarDate { day: 0, ..ok };
        assert!(bad_day.validate().unwrap_err().contains("date.day"));

        let bad_month = CalendarDate { month: 13, ..ok };
        assert!(bad_month.validate().unwrap_err().contains("date.month"));

        let bad_year = CalendarDate { year: 0, ..ok };
        assert!(bad_year.validate().unwrap_err().contains("date.year"));
    }

    #[test]
    fn test_partial_entry_date_serialization() {
        let date = EntryDate {
            day: Some(1),
            month: None,
            year: Some(2020),
        };
        let value = serde_json::to_value(&date).unwrap();
        assert_eq!(value, serde_json::json!({ "day": 1, "year": 2020 }));
    }
}
