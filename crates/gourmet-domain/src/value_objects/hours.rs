//! Weekly operating hours.

use serde::{Deserialize, Serialize};

/// Opening and closing time for one day, as wall-clock `HH:MM` strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeRange {
    pub open_time: String,
    pub close_time: String,
}

impl TimeRange {
    #[must_use]
    pub fn new(open_time: impl Into<String>, close_time: impl Into<String>) -> Self {
        Self {
            open_time: open_time.into(),
            close_time: close_time.into(),
        }
    }
}

/// Operating hours per weekday; `None` means closed that day.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OperatingHours {
    pub monday: Option<TimeRange>,
    pub tuesday: Option<TimeRange>,
    pub wednesday: Option<TimeRange>,
    pub thursday: Option<TimeRange>,
    pub friday: Option<TimeRange>,
    pub saturday: Option<TimeRange>,
    pub sunday: Option<TimeRange>,
}

impl OperatingHours {
    /// Same hours every day of the week.
    #[must_use]
    pub fn every_day(range: TimeRange) -> Self {
        Self {
            monday: Some(range.clone()),
            tuesday: Some(range.clone()),
            wednesday: Some(range.clone()),
            thursday: Some(range.clone()),
            friday: Some(range.clone()),
            saturday: Some(range.clone()),
            sunday: Some(range),
        }
    }

    /// Number of days the restaurant opens.
    #[must_use]
    pub fn open_days(&self) -> usize {
        [
            &self.monday,
            &self.tuesday,
            &self.wednesday,
            &self.thursday,
            &self.friday,
            &self.saturday,
            &self.sunday,
        ]
        .iter()
        .filter(|day| day.is_some())
        .count()
    }
}
