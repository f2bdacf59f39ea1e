use crate::modules::access::core::policy::Actor;
use crate::modules::time_entries::core::events::TimeEntryEvent;
use crate::modules::time_entries::use_cases::delete_time_entry::command::DeleteTimeEntry;
use crate::modules::time_entries::use_cases::delete_time_entry::decide::decide_delete;
use crate::modules::time_entries::use_cases::errors::{ApplicationError, commit, load_state};
use crate::shared::core::primitives::time_entry_stream_id;
use crate::shared::infrastructure::event_store::EventStore;
use crate::shared::infrastructure::intent_outbox::DomainOutbox;
use std::sync::Arc;

pub struct DeleteTimeEntryHandler<TEventStore, TOutbox>
where
    TEventStore: EventStore<TimeEntryEvent> + Send + Sync + 'static,
    TOutbox: DomainOutbox + Send + Sync + 'static,
{
    topic: String,
    event_store: Arc<TEventStore>,
    outbox: Arc<TOutbox>,
}

impl<TEventStore, TOutbox> DeleteTimeEntryHandler<TEventStore, TOutbox>
where
    TEventStore: EventStore<TimeEntryEvent> + Send + Sync + 'static,
    TOutbox: DomainOutbox + Send + Sync + 'static,
{
    pub fn new(
        topic: impl Into<String>,
        event_store: Arc<TEventStore>,
        outbox: Arc<TOutbox>,
    ) -> Self {
        Self {
            topic: topic.into(),
            event_store,
            outbox,
        }
    }

    pub async fn handle(
        &self,
        actor: &Actor,
        command: DeleteTimeEntry,
    ) -> Result<String, ApplicationError> {
        let stream_id = time_entry_stream_id(&command.time_entry_id);
        let loaded = load_state(&*self.event_store, &stream_id).await?;
        let decision = decide_delete(&loaded.state, command, actor);
        commit(
            &*self.event_store,
            &*self.outbox,
            &self.topic,
            &stream_id,
            loaded.version,
            decision,
        )
        .await?;
        tracing::info!(stream_id = %stream_id, user_id = %actor.user_id, "time entry deleted");
        Ok(stream_id)
    }
}
