use serde::{Deserialize, Serialize};

use crate::modules::time_entries::core::collision::DatedEntry;
use crate::modules::time_entries::core::entry_form::KnownEntry;
use crate::modules::time_entries::core::duration::format_duration;
use crate::shared::core::calendar_date::from_stored_millis;

/// Read-model row for one time entry. Deleted entries stay as rows with
/// `deleted_at` set and are filtered out by the queries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeEntryRow {
    pub time_entry_id: String,
    pub tenant_id: String,
    pub user_id: String,
    pub project_id: Option<String>,
    pub date: i64,
    pub duration_minutes: u32,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub description: String,
    pub billable: bool,
    pub created_at: i64,
    pub created_by: String,
    pub updated_at: i64,
    pub updated_by: String,
    pub deleted_at: Option<i64>,
    pub last_event_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeEntryChanges {
    pub project_id: Option<String>,
    pub date: i64,
    pub duration_minutes: u32,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub description: String,
    pub billable: bool,
}

impl TimeEntryRow {
    pub fn apply_changes(&mut self, changes: TimeEntryChanges) {
        self.project_id = changes.project_id;
        self.date = changes.date;
        self.duration_minutes = changes.duration_minutes;
        self.start_time = changes.start_time;
        self.end_time = changes.end_time;
        self.description = changes.description;
        self.billable = changes.billable;
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeEntryView {
    pub time_entry_id: String,
    pub tenant_id: String,
    pub user_id: String,
    pub project_id: Option<String>,
    pub date: i64,
    /// Calendar day recovered from `date`, as `YYYY-MM-DD`.
    pub day: String,
    pub duration_minutes: u32,
    pub duration_label: String,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub description: String,
    pub billable: bool,
    pub created_at: i64,
    pub created_by: String,
    pub updated_at: i64,
    pub updated_by: String,
    pub deleted_at: Option<i64>,
}

impl From<TimeEntryRow> for TimeEntryView {
    fn from(row: TimeEntryRow) -> Self {
        Self {
            day: from_stored_millis(row.date)
                .map(|day| day.to_string())
                .unwrap_or_default(),
            duration_label: format_duration(row.duration_minutes),
            time_entry_id: row.time_entry_id,
            tenant_id: row.tenant_id,
            user_id: row.user_id,
            project_id: row.project_id,
            date: row.date,
            duration_minutes: row.duration_minutes,
            start_time: row.start_time,
            end_time: row.end_time,
            description: row.description,
            billable: row.billable,
            created_at: row.created_at,
            created_by: row.created_by,
            updated_at: row.updated_at,
            updated_by: row.updated_by,
            deleted_at: row.deleted_at,
        }
    }
}

impl DatedEntry for TimeEntryView {
    fn time_entry_id(&self) -> &str {
        &self.time_entry_id
    }

    fn project_id(&self) -> Option<&str> {
        self.project_id.as_deref()
    }

    fn date(&self) -> i64 {
        self.date
    }

    fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }
}

impl TimeEntryView {
    /// The entry as the entry form sees it. `None` when the stored date is
    /// out of range.
    pub fn to_known_entry(&self) -> Option<KnownEntry> {
        Some(KnownEntry {
            time_entry_id: self.time_entry_id.clone(),
            project_id: self.project_id.clone(),
            date: from_stored_millis(self.date)?,
            duration_minutes: self.duration_minutes,
            start_time: self.start_time.clone(),
            end_time: self.end_time.clone(),
            description: self.description.clone(),
            billable: self.billable,
        })
    }
}
