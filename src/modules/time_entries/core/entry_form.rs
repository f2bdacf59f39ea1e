//! Editing session for a single time entry.
//!
//! The form keeps the three time fields consistent through the reconciler,
//! warns as soon as the chosen project and day already hold an entry, and
//! only hands out a submission once every field reads cleanly.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use thiserror::Error;

use crate::modules::time_entries::core::collision::{DatedEntry, find_collision};
use crate::modules::time_entries::core::duration::{DurationInput, format_duration};
use crate::modules::time_entries::core::reconcile::{
    FieldPatch, LastEdited, ReconcileError, TimeFields, reconcile,
};
use crate::modules::time_entries::core::validation::{self, ValidationError};
use crate::shared::core::calendar_date::to_stored_millis;
use crate::shared::core::primitives::EpochMillis;

/// An entry the user already has, as far as the form needs to know it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KnownEntry {
    pub time_entry_id: String,
    pub project_id: Option<String>,
    pub date: NaiveDate,
    pub duration_minutes: u32,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub description: String,
    pub billable: bool,
}

impl DatedEntry for KnownEntry {
    fn time_entry_id(&self) -> &str {
        &self.time_entry_id
    }

    fn project_id(&self) -> Option<&str> {
        self.project_id.as_deref()
    }

    fn date(&self) -> EpochMillis {
        to_stored_millis(self.date)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit { time_entry_id: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionResolution {
    Cancel,
    SwitchToEdit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum FormField {
    Duration,
    StartTime,
    EndTime,
    Description,
}

/// Everything a command needs, minus the ids and timestamps the caller owns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryDraft {
    pub project_id: Option<String>,
    pub date: NaiveDate,
    pub duration: DurationInput,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub description: String,
    pub billable: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormSubmission {
    Create(EntryDraft),
    Update {
        time_entry_id: String,
        draft: EntryDraft,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("an entry already exists for this project and date: {existing_time_entry_id}")]
    Collision { existing_time_entry_id: String },

    #[error("{} field(s) need attention", .0.len())]
    Invalid(BTreeMap<FormField, ValidationError>),
}

#[derive(Debug, Clone)]
pub struct EntryForm {
    mode: FormMode,
    project_id: Option<String>,
    date: NaiveDate,
    fields: TimeFields,
    description: String,
    billable: bool,
    last_edited: LastEdited,
    collision: Option<String>,
    errors: BTreeMap<FormField, ValidationError>,
    known: Vec<KnownEntry>,
}

impl EntryForm {
    /// Blank form for a new entry on `date`. `known` are the user's entries
    /// that could collide with it.
    pub fn create(date: NaiveDate, known: Vec<KnownEntry>) -> Self {
        let mut form = Self {
            mode: FormMode::Create,
            project_id: None,
            date,
            fields: TimeFields::default(),
            description: String::new(),
            billable: true,
            last_edited: LastEdited::None,
            collision: None,
            errors: BTreeMap::new(),
            known,
        };
        form.detect_collision();
        form
    }

    pub fn edit(entry: &KnownEntry, known: Vec<KnownEntry>) -> Self {
        let mut form = Self::create(entry.date, known);
        form.load(entry);
        form
    }

    pub fn mode(&self) -> &FormMode {
        &self.mode
    }

    pub fn project_id(&self) -> Option<&str> {
        self.project_id.as_deref()
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn fields(&self) -> &TimeFields {
        &self.fields
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn billable(&self) -> bool {
        self.billable
    }

    pub fn last_edited(&self) -> LastEdited {
        self.last_edited
    }

    /// Id of the entry the current project and day collide with.
    pub fn pending_collision(&self) -> Option<&str> {
        self.collision.as_deref()
    }

    pub fn errors(&self) -> &BTreeMap<FormField, ValidationError> {
        &self.errors
    }

    pub fn edit_start(
        &mut self,
        value: impl Into<String>,
    ) -> Result<Option<FieldPatch>, ReconcileError> {
        self.fields.start_time = value.into();
        self.errors.remove(&FormField::StartTime);
        self.touch(LastEdited::Start)
    }

    pub fn edit_end(
        &mut self,
        value: impl Into<String>,
    ) -> Result<Option<FieldPatch>, ReconcileError> {
        self.fields.end_time = value.into();
        self.errors.remove(&FormField::EndTime);
        self.touch(LastEdited::End)
    }

    pub fn edit_duration(
        &mut self,
        value: impl Into<String>,
    ) -> Result<Option<FieldPatch>, ReconcileError> {
        self.fields.duration = value.into();
        self.errors.remove(&FormField::Duration);
        self.touch(LastEdited::Duration)
    }

    pub fn set_description(&mut self, value: impl Into<String>) {
        self.description = value.into();
        self.errors.remove(&FormField::Description);
    }

    pub fn set_billable(&mut self, billable: bool) {
        self.billable = billable;
    }

    pub fn select_project(&mut self, project_id: Option<String>) -> Option<&str> {
        if self.project_id != project_id {
            self.project_id = project_id;
            self.detect_collision();
        }
        self.pending_collision()
    }

    pub fn select_date(&mut self, date: NaiveDate) -> Option<&str> {
        if self.date != date {
            self.date = date;
            self.detect_collision();
        }
        self.pending_collision()
    }

    /// `None` means the form was closed.
    pub fn resolve_collision(mut self, resolution: CollisionResolution) -> Option<Self> {
        match resolution {
            CollisionResolution::Cancel => None,
            CollisionResolution::SwitchToEdit => {
                let existing = self
                    .collision
                    .as_deref()
                    .and_then(|id| self.known.iter().find(|e| e.time_entry_id == id))
                    .cloned();
                if let Some(entry) = existing {
                    self.load(&entry);
                }
                Some(self)
            }
        }
    }

    /// Validates every field and, when nothing blocks, returns what to send.
    /// Field errors stay on the form until the field is edited again.
    pub fn submit(&mut self) -> Result<FormSubmission, FormError> {
        if let Some(existing_time_entry_id) = self.collision.clone() {
            return Err(FormError::Collision {
                existing_time_entry_id,
            });
        }

        let duration = DurationInput::Text(self.fields.duration.clone());
        let checks = [
            (
                FormField::Duration,
                validation::duration_minutes(&duration).err(),
            ),
            (
                FormField::StartTime,
                validation::wall_clock("start_time", Some(&self.fields.start_time)).err(),
            ),
            (
                FormField::EndTime,
                validation::wall_clock("end_time", Some(&self.fields.end_time)).err(),
            ),
            (
                FormField::Description,
                validation::description(&self.description).err(),
            ),
        ];
        self.errors = checks
            .into_iter()
            .filter_map(|(field, error)| error.map(|e| (field, e)))
            .collect();
        if !self.errors.is_empty() {
            return Err(FormError::Invalid(self.errors.clone()));
        }

        let draft = EntryDraft {
            project_id: self.project_id.clone(),
            date: self.date,
            duration,
            start_time: non_blank(&self.fields.start_time),
            end_time: non_blank(&self.fields.end_time),
            description: self.description.trim().to_string(),
            billable: self.billable,
        };
        Ok(match &self.mode {
            FormMode::Create => FormSubmission::Create(draft),
            FormMode::Edit { time_entry_id } => FormSubmission::Update {
                time_entry_id: time_entry_id.clone(),
                draft,
            },
        })
    }

    // An unreadable operand leaves the other fields untouched.
    fn touch(&mut self, edited: LastEdited) -> Result<Option<FieldPatch>, ReconcileError> {
        self.last_edited = edited;
        let patch = reconcile(&self.fields, edited)?;
        if let Some(patch) = &patch {
            self.fields.apply(patch);
        }
        Ok(patch)
    }

    fn load(&mut self, entry: &KnownEntry) {
        self.mode = FormMode::Edit {
            time_entry_id: entry.time_entry_id.clone(),
        };
        self.project_id = entry.project_id.clone();
        self.date = entry.date;
        self.fields = TimeFields::new(
            entry.start_time.clone().unwrap_or_default(),
            entry.end_time.clone().unwrap_or_default(),
            format_duration(entry.duration_minutes),
        );
        self.description = entry.description.clone();
        self.billable = entry.billable;
        self.last_edited = LastEdited::None;
        self.errors.clear();
        self.detect_collision();
    }

    fn detect_collision(&mut self) {
        let editing_id = match &self.mode {
            FormMode::Create => None,
            FormMode::Edit { time_entry_id } => Some(time_entry_id.as_str()),
        };
        self.collision = find_collision(
            self.project_id.as_deref(),
            to_stored_millis(self.date),
            editing_id,
            &self.known,
        )
        .map(|entry| entry.time_entry_id.clone());
    }
}

fn non_blank(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}
