use chrono::NaiveDate;

use crate::modules::time_entries::core::duration::DurationInput;
use crate::modules::time_entries::core::entry_form::EntryDraft;

/// Raw request to log time. The owner and tenant come from the acting user,
/// never from the command itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisterTimeEntry {
    pub time_entry_id: String,
    pub project_id: Option<String>,
    pub date: NaiveDate,
    pub duration: DurationInput,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub description: String,
    pub billable: bool,
    pub requested_at: i64,
}

impl RegisterTimeEntry {
    pub fn from_draft(
        time_entry_id: impl Into<String>,
        draft: EntryDraft,
        requested_at: i64,
    ) -> Self {
        Self {
            time_entry_id: time_entry_id.into(),
            project_id: draft.project_id,
            date: draft.date,
            duration: draft.duration,
            start_time: draft.start_time,
            end_time: draft.end_time,
            description: draft.description,
            billable: draft.billable,
            requested_at,
        }
    }
}
