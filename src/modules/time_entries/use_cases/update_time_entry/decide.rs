use crate::modules::access::core::policy::{Action, authorize};
use crate::modules::time_entries::core::{
    collision::DatedEntry,
    decision::{DecideContext, DecideError, Decision},
    events::{TimeEntryEvent, v1::time_entry_updated::TimeEntryUpdatedV1},
    intents::TimeEntryIntent,
    state::TimeEntryState,
    validation,
};
use crate::modules::time_entries::use_cases::update_time_entry::command::UpdateTimeEntry;

pub fn decide_update<E: DatedEntry>(
    state: &TimeEntryState,
    command: UpdateTimeEntry,
    context: &DecideContext<'_, E>,
) -> Decision {
    update(state, command, context).into()
}

fn update<E: DatedEntry>(
    state: &TimeEntryState,
    command: UpdateTimeEntry,
    context: &DecideContext<'_, E>,
) -> Result<(Vec<TimeEntryEvent>, Vec<TimeEntryIntent>), DecideError> {
    let entry = match state {
        TimeEntryState::Registered(entry) if !entry.is_deleted() => entry,
        _ => return Err(DecideError::NotFound),
    };
    authorize(context.actor, Action::ModifyTimeEntry(entry.ownership()))?;
    context.authorize_project()?;
    let fields = validation::entry(
        command.date,
        &command.duration,
        command.start_time.as_deref(),
        command.end_time.as_deref(),
        &command.description,
    )?;
    context.ensure_no_collision(
        command.project_id.as_deref(),
        fields.date,
        Some(&entry.time_entry_id),
    )?;

    let payload = TimeEntryUpdatedV1 {
        time_entry_id: entry.time_entry_id.clone(),
        project_id: command.project_id,
        date: fields.date,
        duration_minutes: fields.duration_minutes,
        start_time: fields.start_time,
        end_time: fields.end_time,
        description: fields.description,
        billable: command.billable,
        updated_at: command.requested_at,
        updated_by: context.actor.user_id.clone(),
    };
    Ok((
        vec![TimeEntryEvent::TimeEntryUpdatedV1(payload.clone())],
        vec![TimeEntryIntent::PublishTimeEntryUpdated { payload }],
    ))
}
