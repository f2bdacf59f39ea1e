use crate::modules::access::core::policy::{Action, Actor, authorize};
use crate::modules::time_entries::core::{
    decision::{DecideError, Decision},
    events::{TimeEntryEvent, v1::time_entry_deleted::TimeEntryDeletedV1},
    intents::TimeEntryIntent,
    state::TimeEntryState,
};
use crate::modules::time_entries::use_cases::delete_time_entry::command::DeleteTimeEntry;

pub fn decide_delete(state: &TimeEntryState, command: DeleteTimeEntry, actor: &Actor) -> Decision {
    let entry = match state {
        TimeEntryState::Registered(entry) if !entry.is_deleted() => entry,
        _ => {
            return Decision::Rejected {
                reason: DecideError::NotFound,
            };
        }
    };
    if let Err(denied) = authorize(actor, Action::ModifyTimeEntry(entry.ownership())) {
        return Decision::Rejected {
            reason: denied.into(),
        };
    }
    let payload = TimeEntryDeletedV1 {
        time_entry_id: command.time_entry_id,
        deleted_at: command.requested_at,
        deleted_by: actor.user_id.clone(),
    };
    Decision::Accepted {
        events: vec![TimeEntryEvent::TimeEntryDeletedV1(payload.clone())],
        intents: vec![TimeEntryIntent::PublishTimeEntryDeleted { payload }],
    }
}
