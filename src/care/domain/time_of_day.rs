//! Clock-of-day labels used for display ordering and conflict detection.

use super::CareDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

const MINUTES_PER_HOUR: u16 = 60;
const HOURS_PER_DAY: u16 = 24;

/// A validated `HH:MM` clock-of-day label.
///
/// Only the start time is modelled. Two labels are equal exactly when their
/// `HH:MM` text is equal, which is what conflict detection relies on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TimeOfDay {
    minutes_since_midnight: u16,
}

impl TimeOfDay {
    /// Parses a strict `HH:MM` label (two-digit hour `00`-`23`, two-digit
    /// minute `00`-`59`).
    ///
    /// # Errors
    ///
    /// Returns [`CareDomainError::InvalidTimeOfDay`] for any other input.
    pub fn parse(value: &str) -> Result<Self, CareDomainError> {
        let invalid = || CareDomainError::InvalidTimeOfDay(value.to_owned());
        let (hour_text, minute_text) = value.split_once(':').ok_or_else(invalid)?;
        let hour = parse_two_digits(hour_text).ok_or_else(invalid)?;
        let minute = parse_two_digits(minute_text).ok_or_else(invalid)?;
        if hour >= HOURS_PER_DAY || minute >= MINUTES_PER_HOUR {
            return Err(invalid());
        }
        Ok(Self {
            minutes_since_midnight: hour * MINUTES_PER_HOUR + minute,
        })
    }

    /// Creates a time from hour and minute components.
    ///
    /// # Errors
    ///
    /// Returns [`CareDomainError::InvalidTimeOfDay`] when either component is
    /// out of range.
    pub fn from_hm(hour: u16, minute: u16) -> Result<Self, CareDomainError> {
        if hour >= HOURS_PER_DAY || minute >= MINUTES_PER_HOUR {
            return Err(CareDomainError::InvalidTimeOfDay(format!(
                "{hour:02}:{minute:02}"
            )));
        }
        Ok(Self {
            minutes_since_midnight: hour * MINUTES_PER_HOUR + minute,
        })
    }

    /// Returns the number of minutes elapsed since midnight.
    #[must_use]
    pub const fn minutes_since_midnight(self) -> u16 {
        self.minutes_since_midnight
    }

    /// Returns the hour component.
    #[must_use]
    pub const fn hour(self) -> u16 {
        self.minutes_since_midnight / MINUTES_PER_HOUR
    }

    /// Returns the minute component.
    #[must_use]
    pub const fn minute(self) -> u16 {
        self.minutes_since_midnight % MINUTES_PER_HOUR
    }
}

fn parse_two_digits(text: &str) -> Option<u16> {
    if text.len() != 2 || !text.bytes().all(|byte| byte.is_ascii_digit()) {
        return None;
    }
    text.parse().ok()
}

impl FromStr for TimeOfDay {
    type Err = CareDomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for TimeOfDay {
    type Error = CareDomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<TimeOfDay> for String {
    fn from(time: TimeOfDay) -> Self {
        time.to_string()
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}
