// A time entry was registered. Timestamps are epoch milliseconds and `date`
// is the stored UTC-midnight instant of the entry's calendar day.

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize, PartialEq, Eq)]
pub struct TimeEntryRegisteredV1 {
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
}
