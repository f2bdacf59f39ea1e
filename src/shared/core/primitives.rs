use chrono::Utc;
use uuid::Uuid;

/// Epoch milliseconds. Every persisted timestamp in the crate uses this unit.
pub type EpochMillis = i64;

pub fn now_millis() -> EpochMillis {
    Utc::now().timestamp_millis()
}

pub fn new_id() -> String {
    Uuid::now_v7().to_string()
}

pub fn time_entry_stream_id(time_entry_id: &str) -> String {
    format!("TimeEntry-{time_entry_id}")
}
