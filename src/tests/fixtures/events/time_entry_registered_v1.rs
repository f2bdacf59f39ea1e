use crate::modules::time_entries::core::events::v1::time_entry_registered::TimeEntryRegisteredV1;
use crate::modules::time_entries::core::events::v1::time_entry_updated::TimeEntryUpdatedV1;
use crate::shared::core::calendar_date::to_stored_millis;
use crate::tests::fixtures::actors::{TENANT_ID, USER_ID};
use crate::tests::fixtures::commands::register_time_entry::RegisterTimeEntryBuilder;

/// Canonical registration, as the decider would emit it for the fixture command.
pub fn make_time_entry_registered_v1_event() -> TimeEntryRegisteredV1 {
    let command = RegisterTimeEntryBuilder::new().build();
    TimeEntryRegisteredV1 {
        time_entry_id: command.time_entry_id,
        tenant_id: TENANT_ID.to_string(),
        user_id: USER_ID.to_string(),
        project_id: command.project_id,
        date: to_stored_millis(command.date),
        duration_minutes: command.duration.to_minutes().unwrap_or_default(),
        start_time: command.start_time,
        end_time: command.end_time,
        description: command.description,
        billable: command.billable,
        created_at: command.requested_at,
        created_by: USER_ID.to_string(),
    }
}

pub fn make_time_entry_updated_v1_event() -> TimeEntryUpdatedV1 {
    let registered = make_time_entry_registered_v1_event();
    TimeEntryUpdatedV1 {
        time_entry_id: registered.time_entry_id,
        project_id: registered.project_id,
        date: registered.date,
        duration_minutes: 120,
        start_time: Some("09:00".to_string()),
        end_time: Some("11:00".to_string()),
        description: "Sprint planning and refinement".to_string(),
        billable: registered.billable,
        updated_at: registered.created_at + 100_000,
        updated_by: USER_ID.to_string(),
    }
}
