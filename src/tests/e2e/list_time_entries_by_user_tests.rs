use crate::modules::time_entries::use_cases::list_time_entries_by_user::queries_port::TimeEntryQueries;
use crate::shell::state::AppState;
use crate::tests::fixtures::actors::{TENANT_ID, USER_ID, owner};
use crate::tests::fixtures::catalog::{PROJECT_ID, seeded_catalog};
use crate::tests::fixtures::commands::register_time_entry::RegisterTimeEntryBuilder;
use chrono::NaiveDate;
use std::sync::Arc;

#[tokio::test]
async fn lists_time_entries_by_user() {
    let state = AppState::with_catalog("time-entries", Arc::new(seeded_catalog().await));

    let commands: Vec<_> = [14, 16, 15]
        .into_iter()
        .map(|d| {
            RegisterTimeEntryBuilder::new()
                .time_entry_id(format!("te-{d}"))
                .project_id(Some(PROJECT_ID))
                .date(NaiveDate::from_ymd_opt(2024, 3, d).unwrap())
                .build()
        })
        .collect();

    for command in commands.iter().cloned() {
        let stream_id = state
            .register_handler
            .handle(&owner(), command)
            .await
            .unwrap();
        state.project_latest(&stream_id).await.unwrap();
    }

    let list = state
        .queries
        .list_by_user_id(TENANT_ID, USER_ID, 0, 10, true)
        .await
        .unwrap();

    assert_eq!(list.len(), 3);
    assert!(list[0].date >= list[1].date);
    assert_eq!(list[0].time_entry_id, commands[1].time_entry_id);
    assert_eq!(list[0].day, "2024-03-16");

    let oldest_first = state
        .queries
        .list_by_user_id(TENANT_ID, USER_ID, 1, 1, false)
        .await
        .unwrap();
    assert_eq!(oldest_first.len(), 1);
    assert_eq!(oldest_first[0].day, "2024-03-15");
}
