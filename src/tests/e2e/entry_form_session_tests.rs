use crate::modules::time_entries::core::entry_form::{
    CollisionResolution, EntryForm, FormMode, FormSubmission,
};
use crate::modules::time_entries::core::reconcile::FieldPatch;
use crate::modules::time_entries::use_cases::list_time_entries_by_user::projection::TimeEntryView;
use crate::modules::time_entries::use_cases::list_time_entries_by_user::queries_port::TimeEntryQueries;
use crate::modules::time_entries::use_cases::register_time_entry::command::RegisterTimeEntry;
use crate::modules::time_entries::use_cases::update_time_entry::command::UpdateTimeEntry;
use crate::shared::core::calendar_date::to_stored_millis;
use crate::shell::state::AppState;
use crate::tests::fixtures::actors::{TENANT_ID, USER_ID, owner};
use crate::tests::fixtures::catalog::{PROJECT_ID, seeded_catalog};
use crate::tests::fixtures::commands::register_time_entry::RegisterTimeEntryBuilder;
use chrono::NaiveDate;
use std::sync::Arc;

fn march_15() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 3, 15).unwrap()
}

async fn known_on(state: &AppState, date: NaiveDate) -> Vec<TimeEntryView> {
    state
        .queries
        .list_by_user_on_day(TENANT_ID, USER_ID, to_stored_millis(date))
        .await
        .unwrap()
}

#[tokio::test]
async fn switches_a_colliding_create_into_an_edit_of_the_existing_entry() {
    let state = AppState::with_catalog("time-entries", Arc::new(seeded_catalog().await));
    let stream_id = state
        .register_handler
        .handle(&owner(), RegisterTimeEntryBuilder::new().build())
        .await
        .unwrap();
    state.project_latest(&stream_id).await.unwrap();

    let known = known_on(&state, march_15()).await;
    let mut form = EntryForm::create(
        march_15(),
        known.iter().filter_map(TimeEntryView::to_known_entry).collect(),
    );
    assert_eq!(
        form.select_project(Some(PROJECT_ID.into())),
        Some("te-fixed-0001")
    );

    let mut form = form
        .resolve_collision(CollisionResolution::SwitchToEdit)
        .unwrap();
    assert_eq!(form.fields().duration, "1h 30m");
    assert_eq!(
        form.edit_end("11:00"),
        Ok(Some(FieldPatch::Duration("2h".into())))
    );

    let FormSubmission::Update {
        time_entry_id,
        draft,
    } = form.submit().unwrap()
    else {
        panic!("expected an update");
    };
    let stream_id = state
        .update_handler
        .handle(
            &owner(),
            UpdateTimeEntry::from_draft(time_entry_id, draft, 1_700_000_100_000),
        )
        .await
        .unwrap();
    state.project_latest(&stream_id).await.unwrap();

    let after = known_on(&state, march_15()).await;
    assert_eq!(after.len(), 1);
    assert_eq!(after[0].duration_minutes, 120);
    assert_eq!(after[0].end_time.as_deref(), Some("11:00"));
}

#[tokio::test]
async fn registers_unassigned_time_next_to_project_time() {
    let state = AppState::with_catalog("time-entries", Arc::new(seeded_catalog().await));
    let stream_id = state
        .register_handler
        .handle(&owner(), RegisterTimeEntryBuilder::new().build())
        .await
        .unwrap();
    state.project_latest(&stream_id).await.unwrap();

    let known = known_on(&state, march_15()).await;
    let mut form = EntryForm::create(
        march_15(),
        known.iter().filter_map(TimeEntryView::to_known_entry).collect(),
    );
    assert_eq!(form.pending_collision(), None);
    form.edit_start("13:00").unwrap();
    form.edit_duration("45m").unwrap();
    form.set_description("Answered support tickets");
    assert_eq!(form.mode(), &FormMode::Create);

    let FormSubmission::Create(draft) = form.submit().unwrap() else {
        panic!("expected a create");
    };
    assert_eq!(draft.end_time.as_deref(), Some("13:45"));
    let stream_id = state
        .register_handler
        .handle(
            &owner(),
            RegisterTimeEntry::from_draft("te-support", draft, 1_700_000_200_000),
        )
        .await
        .unwrap();
    state.project_latest(&stream_id).await.unwrap();

    assert_eq!(known_on(&state, march_15()).await.len(), 2);
}
