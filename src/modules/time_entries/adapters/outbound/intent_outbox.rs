use serde::Serialize;

use crate::modules::time_entries::core::intents::TimeEntryIntent;
use crate::shared::infrastructure::intent_outbox::{DomainOutbox, OutboxError, OutboxRow};

/// Translate a list of domain intents into outbox rows and enqueue them.
/// `starting_version` is the event store stream version before the append.
/// Each intent corresponds to one new version: starting_version + index + 1.
pub async fn dispatch_intents(
    outbox: &impl DomainOutbox,
    stream_id: &str,
    starting_version: i64,
    topic: &str,
    intents: Vec<TimeEntryIntent>,
) -> Result<(), OutboxError> {
    for (i, intent) in intents.into_iter().enumerate() {
        let stream_version = starting_version + i as i64 + 1;
        let (event_type, occurred_at, payload) = match intent {
            TimeEntryIntent::PublishTimeEntryRegistered { payload } => {
                ("TimeEntryRegistered", payload.created_at, to_json(&payload)?)
            }
            TimeEntryIntent::PublishTimeEntryUpdated { payload } => {
                ("TimeEntryUpdated", payload.updated_at, to_json(&payload)?)
            }
            TimeEntryIntent::PublishTimeEntryDeleted { payload } => {
                ("TimeEntryDeleted", payload.deleted_at, to_json(&payload)?)
            }
        };
        outbox
            .enqueue(OutboxRow {
                topic: topic.to_string(),
                event_type: event_type.to_string(),
                event_version: 1,
                stream_id: stream_id.to_string(),
                stream_version,
                occurred_at,
                payload,
            })
            .await?;
    }
    Ok(())
}

fn to_json(payload: &impl Serialize) -> Result<serde_json::Value, OutboxError> {
    serde_json::to_value(payload).map_err(|e| OutboxError::Validation(e.to_string()))
}

#[cfg(test)]
mod time_entry_intent_outbox_tests {
    use super::*;
    use crate::modules::time_entries::core::events::v1::time_entry_deleted::TimeEntryDeletedV1;
    use crate::shared::infrastructure::intent_outbox::in_memory::InMemoryDomainOutbox;
    use crate::tests::fixtures::events::time_entry_registered_v1::{
        make_time_entry_registered_v1_event, make_time_entry_updated_v1_event,
    };
    use rstest::rstest;

    #[rstest]
    #[tokio::test]
    async fn it_should_enqueue_one_row_per_intent_with_consecutive_versions() {
        let outbox = InMemoryDomainOutbox::new();
        let intents = vec![
            TimeEntryIntent::PublishTimeEntryRegistered {
                payload: make_time_entry_registered_v1_event(),
            },
            TimeEntryIntent::PublishTimeEntryUpdated {
                payload: make_time_entry_updated_v1_event(),
            },
            TimeEntryIntent::PublishTimeEntryDeleted {
                payload: TimeEntryDeletedV1 {
                    time_entry_id: "te-fixed-0001".into(),
                    deleted_at: 42,
                    deleted_by: "user-fixed-0001".into(),
                },
            },
        ];
        dispatch_intents(&outbox, "TimeEntry-te-fixed-0001", 0, "time-entries", intents)
            .await
            .expect("dispatch failed");

        assert_eq!(
            outbox.event_types().await,
            vec!["TimeEntryRegistered", "TimeEntryUpdated", "TimeEntryDeleted"]
        );
        let rows = outbox.rows.lock().await;
        let versions: Vec<i64> = rows.iter().map(|row| row.stream_version).collect();
        assert_eq!(versions, vec![1, 2, 3]);
        assert_eq!(rows[2].occurred_at, 42);
        assert_eq!(rows[0].payload["duration_minutes"], 90);
    }
}
