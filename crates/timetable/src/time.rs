//! Minute-resolution wall-clock time.
//!
//! The schedule stores every time as `HH:MM`; internally everything is
//! minutes since midnight so that propagation is plain integer math.

use std::fmt;
use std::str::FromStr;

use chrono::{NaiveTime, Timelike};

use crate::models::types::ScheduleError;

pub const MINUTES_PER_DAY: u32 = 24 * 60;

/// A wall-clock time with minute resolution, `00:00..=23:59`.
///
/// Arithmetic wraps silently at midnight — the schedule has no concept
/// of multi-day runs, so `23:59 + 1min` is `00:00`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeOfDay {
    minutes: u16,
}

impl TimeOfDay {
    pub const MIDNIGHT: TimeOfDay = TimeOfDay { minutes: 0 };

    /// Build from an hour and minute. `None` outside `0..24` / `0..60`.
    pub fn from_hm(hour: u32, minute: u32) -> Option<Self> {
        if hour < 24 && minute < 60 {
            Some(Self {
                minutes: (hour * 60 + minute) as u16,
            })
        } else {
            None
        }
    }

    /// Build from a minute count, reduced modulo one day.
    pub fn from_minutes_since_midnight(minutes: u32) -> Self {
        Self {
            minutes: (minutes % MINUTES_PER_DAY) as u16,
        }
    }

    pub fn hour(&self) -> u32 {
        u32::from(self.minutes) / 60
    }

    pub fn minute(&self) -> u32 {
        u32::from(self.minutes) % 60
    }

    pub fn minutes_since_midnight(&self) -> u32 {
        u32::from(self.minutes)
    }

    /// Add minutes, wrapping past midnight.
    pub fn plus_minutes(&self, minutes: u32) -> Self {
        Self::from_minutes_since_midnight(u32::from(self.minutes) + (minutes % MINUTES_PER_DAY))
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

impl FromStr for TimeOfDay {
    type Err = ScheduleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ScheduleError::InvalidTime(s.to_string());

        let (hour, minute) = s.split_once(':').ok_or_else(invalid)?;
        let hour: u32 = hour.parse().map_err(|_| invalid())?;
        let minute: u32 = minute.parse().map_err(|_| invalid())?;

        Self::from_hm(hour, minute).ok_or_else(invalid)
    }
}

impl From<NaiveTime> for TimeOfDay {
    fn from(t: NaiveTime) -> Self {
        // Seconds are truncated; the schema stores minute resolution.
        Self::from_minutes_since_midnight(t.hour() * 60 + t.minute())
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for TimeOfDay {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for TimeOfDay {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
