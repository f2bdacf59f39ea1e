use crate::modules::time_entries::core::events::TimeEntryEvent;
use crate::modules::time_entries::use_cases::list_time_entries_by_user::projection::{
    TimeEntryChanges, TimeEntryRow,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mutation {
    Upsert(TimeEntryRow),
    Update {
        time_entry_id: String,
        changes: TimeEntryChanges,
        updated_at: i64,
        updated_by: String,
        last_event_id: String,
    },
    MarkDeleted {
        time_entry_id: String,
        deleted_at: i64,
        deleted_by: String,
        last_event_id: String,
    },
}

/// Maps one event to read-model mutations. Pure; the projector performs them.
pub fn apply(stream_id: &str, version: i64, event: &TimeEntryEvent) -> Vec<Mutation> {
    let stream_key = format!("{stream_id}:{version}");
    match event {
        TimeEntryEvent::TimeEntryRegisteredV1(details) => vec![Mutation::Upsert(TimeEntryRow {
            time_entry_id: details.time_entry_id.clone(),
            tenant_id: details.tenant_id.clone(),
            user_id: details.user_id.clone(),
            project_id: details.project_id.clone(),
            date: details.date,
            duration_minutes: details.duration_minutes,
            start_time: details.start_time.clone(),
            end_time: details.end_time.clone(),
            description: details.description.clone(),
            billable: details.billable,
            created_at: details.created_at,
            created_by: details.created_by.clone(),
            updated_at: details.created_at,
            updated_by: details.created_by.clone(),
            deleted_at: None,
            last_event_id: Some(stream_key),
        })],
        TimeEntryEvent::TimeEntryUpdatedV1(details) => vec![Mutation::Update {
            time_entry_id: details.time_entry_id.clone(),
            changes: TimeEntryChanges {
                project_id: details.project_id.clone(),
                date: details.date,
                duration_minutes: details.duration_minutes,
                start_time: details.start_time.clone(),
                end_time: details.end_time.clone(),
                description: details.description.clone(),
                billable: details.billable,
            },
            updated_at: details.updated_at,
            updated_by: details.updated_by.clone(),
            last_event_id: stream_key,
        }],
        TimeEntryEvent::TimeEntryDeletedV1(details) => vec![Mutation::MarkDeleted {
            time_entry_id: details.time_entry_id.clone(),
            deleted_at: details.deleted_at,
            deleted_by: details.deleted_by.clone(),
            last_event_id: stream_key,
        }],
    }
}
