// A time entry was edited by its owner. Carries the full set of editable
// fields, not a diff.

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize, PartialEq, Eq)]
pub struct TimeEntryUpdatedV1 {
    pub time_entry_id: String,
    pub project_id: Option<String>,
    pub date: i64,
    pub duration_minutes: u32,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub description: String,
    pub billable: bool,
    pub updated_at: i64,
    pub updated_by: String,
}
