use chrono::NaiveDate;

use crate::modules::time_entries::use_cases::list_time_entries_by_user::projection::TimeEntryRow;
use crate::shared::core::calendar_date::to_stored_millis;
use crate::tests::fixtures::events::time_entry_registered_v1::make_time_entry_registered_v1_event;

/// Stored instant of 2024-03-`d`.
pub fn day(d: u32) -> i64 {
    let date = NaiveDate::from_ymd_opt(2024, 3, d).expect("valid March 2024 day");
    to_stored_millis(date)
}

pub fn make_time_entry_row() -> TimeEntryRow {
    let event = make_time_entry_registered_v1_event();
    TimeEntryRow {
        time_entry_id: event.time_entry_id,
        tenant_id: event.tenant_id,
        user_id: event.user_id,
        project_id: event.project_id,
        date: event.date,
        duration_minutes: event.duration_minutes,
        start_time: event.start_time,
        end_time: event.end_time,
        description: event.description,
        billable: event.billable,
        created_at: event.created_at,
        created_by: event.created_by.clone(),
        updated_at: event.created_at,
        updated_by: event.created_by,
        deleted_at: None,
        last_event_id: Some("TimeEntry-te-fixed-0001:1".to_string()),
    }
}
