use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

/// Minutes in a full day; every `TimeOfDay` value is strictly below this.
pub const MINUTES_PER_DAY: u16 = 24 * 60;

/// A wall-clock time within a single day, stored as minutes since midnight.
///
/// The wire representation is a zero-padded `"HH:MM"` string (the format the
/// mobile client and the configuration store use). Because those strings are
/// zero-padded, their lexicographic order matches the numeric order of this
/// type, so comparisons behave identically on either side of the boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeOfDay(u16);

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid time of day '{0}' (expected zero-padded HH:MM)")]
pub struct InvalidTimeOfDay(pub String);

impl TimeOfDay {
    /// Build from an hour/minute pair. `None` if either is out of range.
    pub fn new(hour: u16, minute: u16) -> Option<Self> {
        if hour < 24 && minute < 60 {
            Some(Self(hour * 60 + minute))
        } else {
            None
        }
    }

    /// Build from raw minutes since midnight. `None` if >= 1440.
    pub fn from_minutes(minutes: u16) -> Option<Self> {
        if minutes < MINUTES_PER_DAY {
            Some(Self(minutes))
        } else {
            None
        }
    }

    pub fn minutes(self) -> u16 {
        self.0
    }

    pub fn hour(self) -> u16 {
        self.0 / 60
    }

    pub fn minute(self) -> u16 {
        self.0 % 60
    }

    /// Add a span of minutes, normalizing the overflow into hours.
    /// `None` when the result would land past 23:59.
    pub fn checked_add_minutes(self, minutes: u16) -> Option<Self> {
        Self::from_minutes(self.0.checked_add(minutes)?)
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

impl FromStr for TimeOfDay {
    type Err = InvalidTimeOfDay;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || InvalidTimeOfDay(s.to_string());

        let (hour_part, minute_part) = s.split_once(':').ok_or_else(malformed)?;
        if hour_part.len() != 2
            || minute_part.len() != 2
            || !hour_part.bytes().all(|b| b.is_ascii_digit())
            || !minute_part.bytes().all(|b| b.is_ascii_digit())
        {
            return Err(malformed());
        }

        let hour: u16 = hour_part.parse().map_err(|_| malformed())?;
        let minute: u16 = minute_part.parse().map_err(|_| malformed())?;

        Self::new(hour, minute).ok_or_else(malformed)
    }
}

impl Serialize for TimeOfDay {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for TimeOfDay {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_zero_padded_times() {
        let t: TimeOfDay = "09:30".parse().unwrap();
        assert_eq!(t.minutes(), 9 * 60 + 30);
        assert_eq!(t.hour(), 9);
        assert_eq!(t.minute(), 30);

        assert_eq!("00:00".parse::<TimeOfDay>().unwrap().minutes(), 0);
        assert_eq!("23:59".parse::<TimeOfDay>().unwrap().minutes(), 1439);
    }

    #[test]
    fn rejects_malformed_times() {
        for raw in ["", "9:00", "09:0", "24:00", "12:60", "ab:cd", "09-00", "09:00:00", "-1:30"] {
            assert!(raw.parse::<TimeOfDay>().is_err(), "accepted {raw:?}");
        }
    }

    #[test]
    fn ordering_matches_lexicographic_hhmm() {
        let a: TimeOfDay = "09:00".parse().unwrap();
        let b: TimeOfDay = "10:30".parse().unwrap();
        assert!(a < b);
        assert!(a.to_string() < b.to_string());
    }

    #[test]
    fn display_is_zero_padded() {
        let t = TimeOfDay::new(7, 5).unwrap();
        assert_eq!(t.to_string(), "07:05");
    }

    #[test]
    fn checked_add_normalizes_minute_overflow() {
        let t: TimeOfDay = "09:45".parse().unwrap();
        assert_eq!(t.checked_add_minutes(30).unwrap().to_string(), "10:15");

        let late: TimeOfDay = "23:45".parse().unwrap();
        assert_eq!(late.checked_add_minutes(30), None);
    }

    #[test]
    fn serde_uses_hhmm_strings() {
        let t: TimeOfDay = "14:00".parse().unwrap();
        assert_eq!(serde_json::to_string(&t).unwrap(), "\"14:00\"");

        let back: TimeOfDay = serde_json::from_str("\"14:00\"").unwrap();
        assert_eq!(back, t);

        assert!(serde_json::from_str::<TimeOfDay>("\"25:00\"").is_err());
    }
}
