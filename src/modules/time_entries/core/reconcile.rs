//! Keeps start time, end time and duration consistent while a time entry is
//! being edited.
//!
//! Every edit re-derives at most one other field. Rules are checked in order
//! and the first one whose condition holds decides the outcome, even when
//! that outcome is "nothing to write":
//!
//! | condition                                           | derives  |
//! |-----------------------------------------------------|----------|
//! | start and end set, last edit was start or end       | duration |
//! | duration > 0 and start set, last edit was duration or start | end |
//! | duration > 0 and end set, last edit was end         | start    |
//!
//! The field the user is typing in is never the one overwritten.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::modules::time_entries::core::duration::{format_duration, parse_duration};
use crate::modules::time_entries::core::wall_clock::{
    WallClockError, calculate_duration, calculate_end_time, calculate_start_time,
};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LastEdited {
    Duration,
    Start,
    End,
    #[default]
    None,
}

/// The three observable time fields of an entry form. Empty text means the
/// field is not filled in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeFields {
    #[serde(default)]
    pub start_time: String,
    #[serde(default)]
    pub end_time: String,
    #[serde(default)]
    pub duration: String,
}

impl TimeFields {
    pub fn new(
        start_time: impl Into<String>,
        end_time: impl Into<String>,
        duration: impl Into<String>,
    ) -> Self {
        Self {
            start_time: start_time.into(),
            end_time: end_time.into(),
            duration: duration.into(),
        }
    }

    pub fn apply(&mut self, patch: &FieldPatch) {
        match patch {
            FieldPatch::Duration(value) => self.duration = value.clone(),
            FieldPatch::EndTime(value) => self.end_time = value.clone(),
            FieldPatch::StartTime(value) => self.start_time = value.clone(),
        }
    }

    fn start(&self) -> Option<&str> {
        present(&self.start_time)
    }

    fn end(&self) -> Option<&str> {
        present(&self.end_time)
    }

    fn positive_duration(&self) -> Option<u32> {
        parse_duration(&self.duration).filter(|minutes| *minutes > 0)
    }
}

fn present(value: &str) -> Option<&str> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "field", content = "value", rename_all = "snake_case")]
pub enum FieldPatch {
    Duration(String),
    EndTime(String),
    StartTime(String),
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ReconcileError {
    #[error(transparent)]
    WallClock(#[from] WallClockError),
}

/// `Ok(None)` means the fields are already consistent or no rule applies.
/// `Err` means an operand could not be read yet; callers leave the fields
/// untouched in that case.
pub fn reconcile(
    fields: &TimeFields,
    last_edited: LastEdited,
) -> Result<Option<FieldPatch>, ReconcileError> {
    let start = fields.start();
    let end = fields.end();
    let duration = fields.positive_duration();

    if let (Some(start), Some(end), LastEdited::Start | LastEdited::End) = (start, end, last_edited)
    {
        let minutes = calculate_duration(start, end)?;
        if parse_duration(&fields.duration) == Some(minutes) {
            return Ok(None);
        }
        return Ok(Some(FieldPatch::Duration(format_duration(minutes))));
    }

    if let (Some(minutes), Some(start), LastEdited::Duration | LastEdited::Start) =
        (duration, start, last_edited)
    {
        let end_time = calculate_end_time(start, minutes)?;
        if end == Some(end_time.as_str()) {
            return Ok(None);
        }
        return Ok(Some(FieldPatch::EndTime(end_time)));
    }

    if let (Some(minutes), Some(end), LastEdited::End) = (duration, end, last_edited) {
        let start_time = calculate_start_time(end, minutes)?;
        if start == Some(start_time.as_str()) {
            return Ok(None);
        }
        return Ok(Some(FieldPatch::StartTime(start_time)));
    }

    Ok(None)
}
