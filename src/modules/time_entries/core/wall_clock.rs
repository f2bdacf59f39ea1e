// Wall-clock "HH:MM" arithmetic. Values carry no date and no timezone, and
// results that cross midnight wrap silently without recording a day shift.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

pub const MINUTES_PER_DAY: u32 = 24 * 60;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum WallClockError {
    #[error("malformed wall-clock time: {0:?}")]
    Malformed(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct WallClockTime(u32);

impl WallClockTime {
    pub fn from_minutes(minutes_since_midnight: u32) -> Self {
        Self(minutes_since_midnight % MINUTES_PER_DAY)
    }

    pub fn minutes_since_midnight(self) -> u32 {
        self.0
    }
}

impl FromStr for WallClockTime {
    type Err = WallClockError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let malformed = || WallClockError::Malformed(value.to_string());
        let (hours, minutes) = value.trim().split_once(':').ok_or_else(malformed)?;
        let numeric = |part: &str, max_len: usize| {
            (!part.is_empty()
                && part.len() <= max_len
                && part.bytes().all(|b| b.is_ascii_digit()))
            .then(|| part.parse::<u32>().ok())
            .flatten()
        };
        let hours = numeric(hours, 2).filter(|h| *h < 24).ok_or_else(malformed)?;
        let minutes = numeric(minutes, 2)
            .filter(|m| *m < 60 && minutes.len() == 2)
            .ok_or_else(malformed)?;
        Ok(Self(hours * 60 + minutes))
    }
}

impl TryFrom<String> for WallClockTime {
    type Error = WallClockError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<WallClockTime> for String {
    fn from(value: WallClockTime) -> Self {
        value.to_string()
    }
}

impl fmt::Display for WallClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.0 / 60, self.0 % 60)
    }
}

/// Minutes from `start` to `end`, wrapping past midnight when `end` is
/// earlier than `start`.
pub fn calculate_duration(start: &str, end: &str) -> Result<u32, WallClockError> {
    let start = start.parse::<WallClockTime>()?.minutes_since_midnight();
    let end = end.parse::<WallClockTime>()?.minutes_since_midnight();
    if end < start {
        Ok((MINUTES_PER_DAY - start) + end)
    } else {
        Ok(end - start)
    }
}

pub fn calculate_end_time(start: &str, duration_minutes: u32) -> Result<String, WallClockError> {
    let start = i64::from(start.parse::<WallClockTime>()?.minutes_since_midnight());
    Ok(wrap(start + i64::from(duration_minutes)).to_string())
}

pub fn calculate_start_time(end: &str, duration_minutes: u32) -> Result<String, WallClockError> {
    let end = i64::from(end.parse::<WallClockTime>()?.minutes_since_midnight());
    Ok(wrap(end - i64::from(duration_minutes)).to_string())
}

fn wrap(minutes: i64) -> WallClockTime {
    WallClockTime::from_minutes(minutes.rem_euclid(i64::from(MINUTES_PER_DAY)) as u32)
}
