#[derive(Debug, Clone, serde::Serialize, serde::Deserialize, PartialEq, Eq)]
pub struct TimeEntryDeletedV1 {
    pub time_entry_id: String,
    pub deleted_at: i64,
    pub deleted_by: String,
}
