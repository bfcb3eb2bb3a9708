use crate::domain::duration::Duration;
use crate::domain::fields::{self, SECONDS_PER_DAY};
use crate::utils::error::{Result, TimeError};
use chrono::Timelike;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::ops::Add;
use std::str::FromStr;

/// A wall-clock time within one 24-hour cycle.
///
/// Every value satisfies `hours <= 23`, `minutes <= 59` and `seconds <= 59`;
/// the only ways to build one go through [`TimeOfDay::new`].
///
/// Field order matters: the derived ordering is lexicographic over
/// (hours, minutes, seconds).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TimeOfDay {
    hours: u8,
    minutes: u8,
    seconds: u8,
}

impl TimeOfDay {
    pub const MIDNIGHT: TimeOfDay = TimeOfDay {
        hours: 0,
        minutes: 0,
        seconds: 0,
    };

    pub fn new(hours: u8, minutes: u8, seconds: u8) -> Result<Self> {
        if hours > 23 || minutes > 59 || seconds > 59 {
            return Err(TimeError::invalid_argument(format!(
                "time {}:{}:{} is outside 00:00:00-23:59:59",
                hours, minutes, seconds
            )));
        }
        Ok(Self {
            hours,
            minutes,
            seconds,
        })
    }

    pub fn from_hours(hours: u8) -> Result<Self> {
        Self::new(hours, 0, 0)
    }

    pub fn from_hm(hours: u8, minutes: u8) -> Result<Self> {
        Self::new(hours, minutes, 0)
    }

    /// Parses `HH:MM:SS`. Fields need not be zero-padded.
    pub fn parse(input: &str) -> Result<Self> {
        let (hours, minutes, seconds) = fields::parse_hms(input)?;
        Self::new(hours, minutes, seconds)
    }

    /// Reads the local wall clock.
    pub fn now_local() -> Self {
        chrono::Local::now().time().into()
    }

    pub fn hours(&self) -> u8 {
        self.hours
    }

    pub fn minutes(&self) -> u8 {
        self.minutes
    }

    pub fn seconds(&self) -> u8 {
        self.seconds
    }

    pub fn seconds_from_midnight(&self) -> u32 {
        fields::to_seconds(self.hours.into(), self.minutes.into(), self.seconds.into()) as u32
    }

    /// Adds `duration`, wrapping past midnight instead of failing.
    pub fn wrapping_add(self, duration: Duration) -> Self {
        let start = u64::from(self.seconds_from_midnight());
        let raw = (start + duration.total_seconds() % SECONDS_PER_DAY) % SECONDS_PER_DAY;
        let (hours, minutes, seconds) = fields::split_seconds(raw);
        // raw < 86400, so every component fits its range.
        Self {
            hours: hours as u8,
            minutes: minutes as u8,
            seconds: seconds as u8,
        }
    }

    pub fn equals(&self, other: &Self) -> bool {
        self == other
    }

    pub fn less_than(&self, other: &Self) -> bool {
        self < other
    }

    pub fn compare_to(&self, other: &Self) -> Ordering {
        self.cmp(other)
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}:{:02}", self.hours, self.minutes, self.seconds)
    }
}

impl FromStr for TimeOfDay {
    type Err = TimeError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<String> for TimeOfDay {
    type Error = TimeError;

    fn try_from(value: String) -> Result<Self> {
        Self::parse(&value)
    }
}

impl From<TimeOfDay> for String {
    fn from(value: TimeOfDay) -> Self {
        value.to_string()
    }
}

impl From<chrono::NaiveTime> for TimeOfDay {
    fn from(time: chrono::NaiveTime) -> Self {
        // chrono reports a leap second as second 59 with nanos >= 1e9.
        Self {
            hours: time.hour() as u8,
            minutes: time.minute() as u8,
            seconds: time.second().min(59) as u8,
        }
    }
}

impl Add<Duration> for TimeOfDay {
    type Output = TimeOfDay;

    fn add(self, rhs: Duration) -> TimeOfDay {
        self.wrapping_add(rhs)
    }
}
