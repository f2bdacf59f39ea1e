use crate::modules::access::core::policy::Actor;
use crate::modules::catalog::core::ports::ProjectDirectory;
use crate::modules::time_entries::core::decision::DecideContext;
use crate::modules::time_entries::core::events::TimeEntryEvent;
use crate::modules::time_entries::core::state::TimeEntryState;
use crate::modules::time_entries::use_cases::errors::{ApplicationError, commit, load_state};
use crate::modules::time_entries::use_cases::list_time_entries_by_user::queries_port::TimeEntryQueries;
use crate::modules::time_entries::use_cases::update_time_entry::command::UpdateTimeEntry;
use crate::modules::time_entries::use_cases::update_time_entry::decide::decide_update;
use crate::shared::core::calendar_date::to_stored_millis;
use crate::shared::core::primitives::time_entry_stream_id;
use crate::shared::infrastructure::event_store::EventStore;
use crate::shared::infrastructure::intent_outbox::DomainOutbox;
use std::sync::Arc;

pub struct UpdateTimeEntryHandler<TEventStore, TOutbox>
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

impl<TEventStore, TOutbox> UpdateTimeEntryHandler<TEventStore, TOutbox>
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

    pub async fn handle(
        &self,
        actor: &Actor,
        command: UpdateTimeEntry,
    ) -> Result<String, ApplicationError> {
        let stream_id = time_entry_stream_id(&command.time_entry_id);
        let loaded = load_state(&*self.event_store, &stream_id).await?;

        // Collision candidates and membership belong to the entry's owner.
        let (tenant_id, owner_id) = match &loaded.state {
            TimeEntryState::Registered(entry) => (entry.tenant_id.clone(), entry.user_id.clone()),
            TimeEntryState::None => (actor.tenant_id.clone(), actor.user_id.clone()),
        };
        let project = self
            .projects
            .membership(&tenant_id, command.project_id.as_deref(), &owner_id)
            .await?;
        let same_day_entries = self
            .queries
            .list_by_user_on_day(&tenant_id, &owner_id, to_stored_millis(command.date))
            .await?;
        let context = DecideContext {
            actor,
            project: &project,
            same_day_entries: &same_day_entries,
        };

        let decision = decide_update(&loaded.state, command, &context);
        commit(
            &*self.event_store,
            &*self.outbox,
            &self.topic,
            &stream_id,
            loaded.version,
            decision,
        )
        .await?;
        tracing::info!(stream_id = %stream_id, user_id = %actor.user_id, "time entry updated");
        Ok(stream_id)
    }
}

#[cfg(test)]
mod time_entry_update_handler_tests {
    use super::*;
    use crate::modules::time_entries::adapters::outbound::projections_in_memory::InMemoryProjections;
    use crate::modules::time_entries::core::decision::DecideError;
    use crate::modules::time_entries::use_cases::register_time_entry::handler::RegisterTimeEntryHandler;
    use crate::shared::infrastructure::event_store::in_memory::InMemoryEventStore;
    use crate::shared::infrastructure::intent_outbox::in_memory::InMemoryDomainOutbox;
    use crate::tests::fixtures::actors;
    use crate::tests::fixtures::catalog::seeded_catalog;
    use crate::tests::fixtures::commands::register_time_entry::RegisterTimeEntryBuilder;
    use crate::tests::fixtures::commands::update_time_entry::make_update_time_entry_command;
    use rstest::{fixture, rstest};

    type Store = InMemoryEventStore<TimeEntryEvent>;

    struct Handlers {
        event_store: Arc<Store>,
        outbox: Arc<InMemoryDomainOutbox>,
        update: UpdateTimeEntryHandler<Store, InMemoryDomainOutbox>,
    }

    #[fixture]
    async fn registered() -> Handlers {
        let event_store = Arc::new(Store::new());
        let outbox = Arc::new(InMemoryDomainOutbox::new());
        let catalog = Arc::new(seeded_catalog().await);
        let projections = Arc::new(InMemoryProjections::new());
        RegisterTimeEntryHandler::new(
            "time-entries",
            event_store.clone(),
            outbox.clone(),
            projections.clone(),
            catalog.clone(),
        )
        .handle(&actors::owner(), RegisterTimeEntryBuilder::new().build())
        .await
        .expect("register failed");
        let update = UpdateTimeEntryHandler::new(
            "time-entries",
            event_store.clone(),
            outbox.clone(),
            projections,
            catalog,
        );
        Handlers {
            event_store,
            outbox,
            update,
        }
    }

    #[rstest]
    #[tokio::test]
    async fn handle_update_appends_the_new_snapshot(#[future] registered: Handlers) {
        let handlers = registered.await;
        handlers
            .update
            .handle(&actors::owner(), make_update_time_entry_command())
            .await
            .expect("update failed");
        let stream = handlers
            .event_store
            .load("TimeEntry-te-fixed-0001")
            .await
            .unwrap();
        assert_eq!(stream.version, 2);
        assert!(matches!(
            &stream.events[1],
            TimeEntryEvent::TimeEntryUpdatedV1(e) if e.duration_minutes == 120
        ));
        assert_eq!(
            handlers.outbox.event_types().await,
            vec!["TimeEntryRegistered", "TimeEntryUpdated"]
        );
    }

    #[rstest]
    #[tokio::test]
    async fn handle_update_rejects_an_admin_editing_someone_elses_entry(
        #[future] registered: Handlers,
    ) {
        let handlers = registered.await;
        let result = handlers
            .update
            .handle(&actors::admin(), make_update_time_entry_command())
            .await;
        assert!(matches!(
            result,
            Err(ApplicationError::Domain(DecideError::Forbidden(_)))
        ));
    }

    #[rstest]
    #[tokio::test]
    async fn handle_update_rejects_an_unknown_entry(#[future] registered: Handlers) {
        let handlers = registered.await;
        let command = UpdateTimeEntry {
            time_entry_id: "te-missing".into(),
            ..make_update_time_entry_command()
        };
        let result = handlers.update.handle(&actors::owner(), command).await;
        assert!(matches!(
            result,
            Err(ApplicationError::Domain(DecideError::NotFound))
        ));
    }
}
