use chrono::NaiveDate;
use thiserror::Error;

use crate::modules::time_entries::core::duration::DurationInput;
use crate::modules::time_entries::core::wall_clock::WallClockTime;
use crate::shared::core::calendar_date::to_stored_millis;
use crate::shared::core::primitives::EpochMillis;

pub const MIN_DESCRIPTION_CHARS: usize = 10;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("duration could not be understood")]
    DurationUnparseable,

    #[error("duration must be at least one minute")]
    DurationTooShort,

    #[error("description must be at least {} characters", MIN_DESCRIPTION_CHARS)]
    DescriptionTooShort,

    #[error("{field} must be a HH:MM time")]
    MalformedWallClock { field: &'static str },
}

pub fn duration_minutes(input: &DurationInput) -> Result<u32, ValidationError> {
    let minutes = input
        .to_minutes()
        .ok_or(ValidationError::DurationUnparseable)?;
    if minutes < 1 {
        return Err(ValidationError::DurationTooShort);
    }
    Ok(minutes)
}

pub fn description(text: &str) -> Result<String, ValidationError> {
    let trimmed = text.trim();
    if trimmed.chars().count() < MIN_DESCRIPTION_CHARS {
        return Err(ValidationError::DescriptionTooShort);
    }
    Ok(trimmed.to_string())
}

/// Blank means "not given". Anything else must be a valid wall-clock time and
/// comes back zero padded.
pub fn wall_clock(
    field: &'static str,
    value: Option<&str>,
) -> Result<Option<String>, ValidationError> {
    match value.map(str::trim).filter(|v| !v.is_empty()) {
        None => Ok(None),
        Some(v) => v
            .parse::<WallClockTime>()
            .map(|time| Some(time.to_string()))
            .map_err(|_| ValidationError::MalformedWallClock { field }),
    }
}

/// The validated, normalized editable fields shared by registration and edits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidEntry {
    pub date: EpochMillis,
    pub duration_minutes: u32,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub description: String,
}

pub fn entry(
    date: NaiveDate,
    duration: &DurationInput,
    start_time: Option<&str>,
    end_time: Option<&str>,
    text: &str,
) -> Result<ValidEntry, ValidationError> {
    Ok(ValidEntry {
        date: to_stored_millis(date),
        duration_minutes: duration_minutes(duration)?,
        start_time: wall_clock("start_time", start_time)?,
        end_time: wall_clock("end_time", end_time)?,
        description: description(text)?,
    })
}
