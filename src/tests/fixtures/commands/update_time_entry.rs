use crate::modules::time_entries::core::duration::DurationInput;
use crate::modules::time_entries::use_cases::update_time_entry::command::UpdateTimeEntry;
use crate::tests::fixtures::commands::register_time_entry::RegisterTimeEntryBuilder;

/// Edit of the fixture entry: same project and day, longer and re-described.
pub fn make_update_time_entry_command() -> UpdateTimeEntry {
    let registered = RegisterTimeEntryBuilder::new().build();
    UpdateTimeEntry {
        time_entry_id: registered.time_entry_id,
        project_id: registered.project_id,
        date: registered.date,
        duration: DurationInput::Text("2h".into()),
        start_time: Some("09:00".into()),
        end_time: Some("11:00".into()),
        description: "Sprint planning and refinement".into(),
        billable: registered.billable,
        requested_at: registered.requested_at + 100_000,
    }
}
