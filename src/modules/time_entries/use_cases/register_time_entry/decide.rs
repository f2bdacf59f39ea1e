use crate::modules::time_entries::core::{
    collision::DatedEntry,
    decision::{DecideContext, DecideError, Decision},
    events::{TimeEntryEvent, v1::time_entry_registered::TimeEntryRegisteredV1},
    intents::TimeEntryIntent,
    state::TimeEntryState,
    validation,
};
use crate::modules::time_entries::use_cases::register_time_entry::command::RegisterTimeEntry;

pub fn decide_register<E: DatedEntry>(
    state: &TimeEntryState,
    command: RegisterTimeEntry,
    context: &DecideContext<'_, E>,
) -> Decision {
    register(state, command, context).into()
}

fn register<E: DatedEntry>(
    state: &TimeEntryState,
    command: RegisterTimeEntry,
    context: &DecideContext<'_, E>,
) -> Result<(Vec<TimeEntryEvent>, Vec<TimeEntryIntent>), DecideError> {
    if !matches!(state, TimeEntryState::None) {
        return Err(DecideError::AlreadyExists);
    }
    context.authorize_project()?;
    let fields = validation::entry(
        command.date,
        &command.duration,
        command.start_time.as_deref(),
        command.end_time.as_deref(),
        &command.description,
    )?;
    context.ensure_no_collision(command.project_id.as_deref(), fields.date, None)?;

    let actor = context.actor;
    let payload = TimeEntryRegisteredV1 {
        time_entry_id: command.time_entry_id,
        tenant_id: actor.tenant_id.clone(),
        user_id: actor.user_id.clone(),
        project_id: command.project_id,
        date: fields.date,
        duration_minutes: fields.duration_minutes,
        start_time: fields.start_time,
        end_time: fields.end_time,
        description: fields.description,
        billable: command.billable,
        created_at: command.requested_at,
        created_by: actor.user_id.clone(),
    };
    Ok((
        vec![TimeEntryEvent::TimeEntryRegisteredV1(payload.clone())],
        vec![TimeEntryIntent::PublishTimeEntryRegistered { payload }],
    ))
}
