use crate::modules::time_entries::core::events::TimeEntryEvent;
use crate::modules::time_entries::core::state::{RegisteredTimeEntry, TimeEntryState};

/// Deterministic state transition. Events that make no sense for the current
/// state leave it untouched.
pub fn evolve(state: TimeEntryState, event: TimeEntryEvent) -> TimeEntryState {
    match (state, event) {
        (TimeEntryState::None, TimeEntryEvent::TimeEntryRegisteredV1(e)) => {
            TimeEntryState::Registered(RegisteredTimeEntry {
                time_entry_id: e.time_entry_id,
                tenant_id: e.tenant_id,
                user_id: e.user_id,
                project_id: e.project_id,
                date: e.date,
                duration_minutes: e.duration_minutes,
                start_time: e.start_time,
                end_time: e.end_time,
                description: e.description,
                billable: e.billable,
                created_at: e.created_at,
                created_by: e.created_by.clone(),
                updated_at: e.created_at,
                updated_by: e.created_by,
                deleted_at: None,
            })
        }
        (TimeEntryState::Registered(entry), TimeEntryEvent::TimeEntryUpdatedV1(e))
            if !entry.is_deleted() =>
        {
            TimeEntryState::Registered(RegisteredTimeEntry {
                project_id: e.project_id,
                date: e.date,
                duration_minutes: e.duration_minutes,
                start_time: e.start_time,
                end_time: e.end_time,
                description: e.description,
                billable: e.billable,
                updated_at: e.updated_at,
                updated_by: e.updated_by,
                ..entry
            })
        }
        (TimeEntryState::Registered(entry), TimeEntryEvent::TimeEntryDeletedV1(e))
            if !entry.is_deleted() =>
        {
            TimeEntryState::Registered(RegisteredTimeEntry {
                updated_at: e.deleted_at,
                updated_by: e.deleted_by,
                deleted_at: Some(e.deleted_at),
                ..entry
            })
        }
        (state, _) => state,
    }
}
