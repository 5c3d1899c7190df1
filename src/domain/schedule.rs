//! Date and time-of-day values captured by the "Date & Time" section.

use std::{fmt, str::FromStr};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::errors::BookingError;

/// Minutes offered by the time pickers.
pub const MINUTE_STEPS: [u8; 4] = [0, 15, 30, 45];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Period {
    AM,
    PM,
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Period::AM => f.write_str("AM"),
            Period::PM => f.write_str("PM"),
        }
    }
}

/// A twelve-hour clock reading restricted to quarter hours.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawTimeOfDay")]
pub struct TimeOfDay {
    hour: u8,
    minute: u8,
    period: Period,
}

impl TimeOfDay {
    pub fn new(hour: u8, minute: u8, period: Period) -> Result<Self, BookingError> {
        if !(1..=12).contains(&hour) {
            return Err(BookingError::InvalidInput(format!(
                "hour must be between 1 and 12 (got {})",
                hour
            )));
        }
        if !MINUTE_STEPS.contains(&minute) {
            return Err(BookingError::InvalidInput(format!(
                "minute must be one of 00, 15, 30 or 45 (got {:02})",
                minute
            )));
        }
        Ok(Self {
            hour,
            minute,
            period,
        })
    }

    pub fn hour(&self) -> u8 {
        self.hour
    }

    pub fn minute(&self) -> u8 {
        self.minute
    }

    pub fn period(&self) -> Period {
        self.period
    }

    /// Minutes elapsed since midnight, e.g. `12:15 AM` is 15.
    pub fn minutes_since_midnight(&self) -> u16 {
        let hour24 = match (self.hour, self.period) {
            (12, Period::AM) => 0,
            (12, Period::PM) => 12,
            (hour, Period::AM) => hour,
            (hour, Period::PM) => hour + 12,
        };
        u16::from(hour24) * 60 + u16::from(self.minute)
    }

    /// Clock digits without the period, e.g. `9:30`.
    pub fn clock_label(&self) -> String {
        format!("{}:{:02}", self.hour, self.minute)
    }
}

/// Unchecked wire form; converted through [`TimeOfDay::new`].
#[derive(Deserialize)]
struct RawTimeOfDay {
    hour: u8,
    minute: u8,
    period: Period,
}

impl TryFrom<RawTimeOfDay> for TimeOfDay {
    type Error = BookingError;

    fn try_from(raw: RawTimeOfDay) -> Result<Self, Self::Error> {
        TimeOfDay::new(raw.hour, raw.minute, raw.period)
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.clock_label(), self.period)
    }
}

impl FromStr for TimeOfDay {
    type Err = BookingError;

    /// Accepts `9am`, `9:30 PM`, `11:45pm` and similar spellings.
    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let compact: String = input
            .chars()
            .filter(|ch| !ch.is_whitespace())
            .collect::<String>()
            .to_ascii_uppercase();
        let invalid = || {
            BookingError::InvalidInput(format!(
                "`{}` is not a time (use forms like 9am or 9:30 PM)",
                input.trim()
            ))
        };

        let (clock, period) = if let Some(rest) = compact.strip_suffix("AM") {
            (rest, Period::AM)
        } else if let Some(rest) = compact.strip_suffix("PM") {
            (rest, Period::PM)
        } else {
            return Err(invalid());
        };

        let (hour, minute) = match clock.split_once(':') {
            Some((hour, minute)) => (hour, minute),
            None => (clock, "0"),
        };
        let hour = hour.parse::<u8>().map_err(|_| invalid())?;
        let minute = minute.parse::<u8>().map_err(|_| invalid())?;
        TimeOfDay::new(hour, minute, period)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeRange {
    pub start: TimeOfDay,
    pub end: TimeOfDay,
}

impl TimeRange {
    pub fn new(start: TimeOfDay, end: TimeOfDay) -> Self {
        Self { start, end }
    }
}

/// Value of the "Date & Time" section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schedule {
    pub date: Option<NaiveDate>,
    pub time: Option<TimeRange>,
    pub is_date_flexible: bool,
    pub is_time_flexible: bool,
}

impl Schedule {
    pub fn flexible() -> Self {
        Self {
            date: None,
            time: None,
            is_date_flexible: true,
            is_time_flexible: true,
        }
    }
}
