use crate::domain::fields;
use crate::domain::time_of_day::TimeOfDay;
use crate::utils::error::{Result, TimeError};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// An elapsed span of time, kept as a whole number of seconds.
///
/// Unlike [`TimeOfDay`], the component constructors do not range-check:
/// `Duration::new(30, 90, 0)` is 31h30m. Arithmetic results are limited to
/// 255 whole hours, the widest hour field the component constructors accept.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(try_from = "String", into = "String")]
pub struct Duration {
    total_seconds: u64,
}

impl Duration {
    pub const ZERO: Duration = Duration { total_seconds: 0 };

    /// Largest hour component an arithmetic result may carry.
    pub const MAX_RESULT_HOURS: u64 = u8::MAX as u64;

    pub fn new(hours: u8, minutes: u8, seconds: u8) -> Self {
        Self::from_total_seconds(fields::to_seconds(
            hours.into(),
            minutes.into(),
            seconds.into(),
        ))
    }

    pub fn from_hm(hours: u8, minutes: u8) -> Self {
        Self::new(hours, minutes, 0)
    }

    pub fn from_secs(seconds: u8) -> Self {
        Self::new(0, 0, seconds)
    }

    /// The span from `start` to `end` on the same day.
    pub fn between(start: TimeOfDay, end: TimeOfDay) -> Result<Self> {
        let start_seconds = start.seconds_from_midnight();
        let end_seconds = end.seconds_from_midnight();
        if end_seconds < start_seconds {
            return Err(TimeError::invalid_argument(format!(
                "end {} is earlier than start {}",
                end, start
            )));
        }
        Ok(Self::from_total_seconds(u64::from(end_seconds - start_seconds)))
    }

    /// Parses `H:MM:SS`. Each field only has to fit in 0-255, so
    /// `"1:90:00"` is accepted as 2h30m.
    pub fn parse(input: &str) -> Result<Self> {
        let (hours, minutes, seconds) = fields::parse_hms(input)?;
        Ok(Self::new(hours, minutes, seconds))
    }

    pub(crate) fn from_total_seconds(total_seconds: u64) -> Self {
        Self { total_seconds }
    }

    pub fn total_seconds(&self) -> u64 {
        self.total_seconds
    }

    pub fn hours(&self) -> u64 {
        fields::split_seconds(self.total_seconds).0
    }

    pub fn minutes(&self) -> u64 {
        fields::split_seconds(self.total_seconds).1
    }

    pub fn seconds(&self) -> u64 {
        fields::split_seconds(self.total_seconds).2
    }

    pub fn checked_add(self, other: Duration) -> Result<Self> {
        let sum = self
            .total_seconds
            .checked_add(other.total_seconds)
            .ok_or_else(|| {
                TimeError::overflow(format!("{} + {} exceeds u64 seconds", self, other))
            })?;
        Self::narrowed(sum).map_err(|_| {
            TimeError::overflow(format!(
                "{} + {} has more than {} hours",
                self,
                other,
                Self::MAX_RESULT_HOURS
            ))
        })
    }

    pub fn checked_sub(self, other: Duration) -> Result<Self> {
        let diff = self.total_seconds.checked_sub(other.total_seconds).ok_or_else(|| {
            TimeError::overflow(format!("{} - {} would be negative", self, other))
        })?;
        Self::narrowed(diff).map_err(|_| {
            TimeError::overflow(format!(
                "{} - {} has more than {} hours",
                self,
                other,
                Self::MAX_RESULT_HOURS
            ))
        })
    }

    /// Re-packs `total` through narrow (hours, minutes, seconds) fields,
    /// failing if the hour component does not fit.
    fn narrowed(total: u64) -> Result<Self> {
        let (hours, minutes, seconds) = fields::split_seconds(total);
        let hours = u8::try_from(hours)
            .map_err(|_| TimeError::overflow(format!("{} hours do not fit in a u8", hours)))?;
        // minutes and seconds are below 60 after the split
        Ok(Self::new(hours, minutes as u8, seconds as u8))
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

impl fmt::Display for Duration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (hours, minutes, seconds) = fields::split_seconds(self.total_seconds);
        write!(f, "{}:{:02}:{:02}", hours, minutes, seconds)
    }
}

impl FromStr for Duration {
    type Err = TimeError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Duration {
    type Error = TimeError;

    fn try_from(value: String) -> Result<Self> {
        Self::parse(&value)
    }
}

impl From<Duration> for String {
    fn from(value: Duration) -> Self {
        value.to_string()
    }
}
