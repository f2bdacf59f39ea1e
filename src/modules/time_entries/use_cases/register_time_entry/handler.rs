use crate::modules::access::core::policy::Actor;
use crate::modules::catalog::core::ports::ProjectDirectory;
use crate::modules::time_entries::core::decision::DecideContext;
use crate::modules::time_entries::core::events::TimeEntryEvent;
use crate::modules::time_entries::use_cases::errors::{ApplicationError, commit, load_state};
use crate::modules::time_entries::use_cases::list_time_entries_by_user::queries_port::TimeEntryQueries;
use crate::modules::time_entries::use_cases::register_time_entry::command::RegisterTimeEntry;
use crate::modules::time_entries::use_cases::register_time_entry::decide::decide_register;
use crate::shared::core::calendar_date::to_stored_millis;
use crate::shared::core::primitives::time_entry_stream_id;
use crate::shared::infrastructure::event_store::EventStore;
use crate::shared::infrastructure::intent_outbox::DomainOutbox;
use std::sync::Arc;

pub struct RegisterTimeEntryHandler<TEventStore, TOutbox>
where
    TEventStore: EventStore<TimeEntryEvent> + Send + Sync + 'static,
    TOutbox: DomainOutbox + Send + Sync + 'static,
{
    topic: String,
    event_store: Arc<TEventStore>,
    outbox: Arc<TOutbox>,
    queries: Arc<dyn TimeEntryQueries>,
    projects: Arc<dyn ProjectDirectory>,
}

impl<TEventStore, TOutbox> RegisterTimeEntryHandler<TEventStore, TOutbox>
where
    TEventStore: EventStore<TimeEntryEvent> + Send + Sync + 'static,
    TOutbox: DomainOutbox + Send + Sync + 'static,
{
    pub fn new(
        topic: impl Into<String>,
        event_store: Arc<TEventStore>,
        outbox: Arc<TOutbox>,
        queries: Arc<dyn TimeEntryQueries>,
        projects: Arc<dyn ProjectDirectory>,
    ) -> Self {
        Self {
            topic: topic.into(),
            event_store,
            outbox,
            queries,
            projects,
        }
    }

    /// Registers the entry for `actor` and returns its stream id.
    pub async fn handle(
        &self,
        actor: &Actor,
        command: RegisterTimeEntry,
    ) -> Result<String, ApplicationError> {
        let stream_id = time_entry_stream_id(&command.time_entry_id);
        let loaded = load_state(&*self.event_store, &stream_id).await?;

        let project = self
            .projects
            .membership(
                &actor.tenant_id,
                command.project_id.as_deref(),
                &actor.user_id,
            )
            .await?;
        let same_day_entries = self
            .queries
            .list_by_user_on_day(
                &actor.tenant_id,
                &actor.user_id,
                to_stored_millis(command.date),
            )
            .await?;
        let context = DecideContext {
            actor,
            project: &project,
            same_day_entries: &same_day_entries,
        };

        let decision = decide_register(&loaded.state, command, &context);
        commit(
            &*self.event_store,
            &*self.outbox,
            &self.topic,
            &stream_id,
            loaded.version,
            decision,
        )
        .await?;
        tracing::info!(stream_id = %stream_id, user_id = %actor.user_id, "time entry registered");
        Ok(stream_id)
    }
}
