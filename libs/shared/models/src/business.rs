use chrono::Weekday;
use serde::{Deserialize, Serialize};

/// Opening hours for one weekday, exactly as the business-configuration
/// store keeps them: raw `"HH:MM"` strings that may be unset for days the
/// owner never filled in, plus a closed flag.
///
/// Invariant (enforced where the values are parsed, not here): when the day
/// is not closed, `open < close`. Overnight windows are not supported.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkingWindow {
    pub open: Option<String>,
    pub close: Option<String>,
    #[serde(default)]
    pub is_closed: bool,
}

impl WorkingWindow {
    pub fn hours(open: &str, close: &str) -> Self {
        Self {
            open: Some(open.to_string()),
            close: Some(close.to_string()),
            is_closed: false,
        }
    }

    pub fn closed() -> Self {
        Self {
            open: None,
            close: None,
            is_closed: true,
        }
    }
}

/// A business's weekly schedule, one window per weekday.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeeklyWorkingHours {
    #[serde(default)]
    pub monday: WorkingWindow,
    #[serde(default)]
    pub tuesday: WorkingWindow,
    #[serde(default)]
    pub wednesday: WorkingWindow,
    #[serde(default)]
    pub thursday: WorkingWindow,
    #[serde(default)]
    pub friday: WorkingWindow,
    #[serde(default)]
    pub saturday: WorkingWindow,
    #[serde(default)]
    pub sunday: WorkingWindow,
}

impl WeeklyWorkingHours {
    pub fn window_for(&self, weekday: Weekday) -> &WorkingWindow {
        match weekday {
            Weekday::Mon => &self.monday,
            Weekday::Tue => &self.tuesday,
            Weekday::Wed => &self.wednesday,
            Weekday::Thu => &self.thursday,
            Weekday::Fri => &self.friday,
            Weekday::Sat => &self.saturday,
            Weekday::Sun => &self.sunday,
        }
    }
}
