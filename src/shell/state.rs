// Composition of the in-memory adapters into the handlers every inbound
// adapter shares.

use crate::modules::catalog::adapters::outbound::catalog_in_memory::InMemoryCatalog;
use crate::modules::catalog::core::ports::{CatalogRepository, ProjectDirectory};
use crate::modules::catalog::use_cases::manage_catalog::handler::CatalogHandler;
use crate::modules::invoicing::adapters::outbound::invoice_items_in_memory::InMemoryInvoiceItems;
use crate::modules::invoicing::use_cases::manage_invoice_items::handler::InvoiceItemsHandler;
use crate::modules::invoicing::use_cases::summarize_billable_time::handler::BillingHandler;
use crate::modules::time_entries::adapters::outbound::projections_in_memory::InMemoryProjections;
use crate::modules::time_entries::core::events::TimeEntryEvent;
use crate::modules::time_entries::use_cases::delete_time_entry::handler::DeleteTimeEntryHandler;
use crate::modules::time_entries::use_cases::list_time_entries_by_user::handler::Projector;
use crate::modules::time_entries::use_cases::list_time_entries_by_user::queries_port::TimeEntryQueries;
use crate::modules::time_entries::use_cases::register_time_entry::handler::RegisterTimeEntryHandler;
use crate::modules::time_entries::use_cases::update_time_entry::handler::UpdateTimeEntryHandler;
use crate::shared::infrastructure::event_store::EventStore;
use crate::shared::infrastructure::event_store::in_memory::InMemoryEventStore;
use crate::shared::infrastructure::intent_outbox::in_memory::InMemoryDomainOutbox;
use anyhow::Context;
use std::sync::Arc;

pub type Store = InMemoryEventStore<TimeEntryEvent>;
pub type Outbox = InMemoryDomainOutbox;

pub const PROJECTOR_NAME: &str = "time_entries_by_user";

#[derive(Clone)]
pub struct AppState {
    pub queries: Arc<dyn TimeEntryQueries>,
    pub register_handler: Arc<RegisterTimeEntryHandler<Store, Outbox>>,
    pub update_handler: Arc<UpdateTimeEntryHandler<Store, Outbox>>,
    pub delete_handler: Arc<DeleteTimeEntryHandler<Store, Outbox>>,
    pub event_store: Arc<Store>,
    pub outbox: Arc<Outbox>,
    pub projector: Arc<Projector<InMemoryProjections, InMemoryProjections>>,
    pub catalog: Arc<CatalogHandler>,
    pub invoice_items: Arc<InvoiceItemsHandler>,
    pub billing: Arc<BillingHandler>,
}

/// Adapters an `AppState` is built from.
pub struct Adapters {
    pub event_store: Arc<Store>,
    pub outbox: Arc<Outbox>,
    pub projections: Arc<InMemoryProjections>,
    pub catalog: Arc<InMemoryCatalog>,
    pub invoice_items: Arc<InMemoryInvoiceItems>,
}

impl Default for Adapters {
    fn default() -> Self {
        Self {
            event_store: Arc::new(Store::new()),
            outbox: Arc::new(Outbox::new()),
            projections: Arc::new(InMemoryProjections::new()),
            catalog: Arc::new(InMemoryCatalog::new()),
            invoice_items: Arc::new(InMemoryInvoiceItems::new()),
        }
    }
}

impl AppState {
    pub fn assemble(topic: &str, adapters: Adapters) -> Self {
        let Adapters {
            event_store,
            outbox,
            projections,
            catalog,
            invoice_items,
        } = adapters;

        let queries: Arc<dyn TimeEntryQueries> = projections.clone();
        let directory: Arc<dyn ProjectDirectory> = catalog.clone();
        let catalog_repository: Arc<dyn CatalogRepository> = catalog;

        Self {
            register_handler: Arc::new(RegisterTimeEntryHandler::new(
                topic,
                event_store.clone(),
                outbox.clone(),
                queries.clone(),
                directory.clone(),
            )),
            update_handler: Arc::new(UpdateTimeEntryHandler::new(
                topic,
                event_store.clone(),
                outbox.clone(),
                queries.clone(),
                directory,
            )),
            delete_handler: Arc::new(DeleteTimeEntryHandler::new(
                topic,
                event_store.clone(),
                outbox.clone(),
            )),
            projector: Arc::new(Projector::new(
                PROJECTOR_NAME,
                projections.clone(),
                projections,
            )),
            catalog: Arc::new(CatalogHandler::new(catalog_repository.clone())),
            invoice_items: Arc::new(InvoiceItemsHandler::new(invoice_items.clone())),
            billing: Arc::new(BillingHandler::new(
                queries.clone(),
                catalog_repository,
                invoice_items,
            )),
            queries,
            event_store,
            outbox,
        }
    }

    pub fn in_memory(topic: &str) -> Self {
        Self::assemble(topic, Adapters::default())
    }

    pub fn new(topic: &str, event_store: Store) -> Self {
        Self::assemble(
            topic,
            Adapters {
                event_store: Arc::new(event_store),
                ..Adapters::default()
            },
        )
    }

    pub fn with_projections(topic: &str, projections: Arc<InMemoryProjections>) -> Self {
        Self::assemble(
            topic,
            Adapters {
                projections,
                ..Adapters::default()
            },
        )
    }

    pub fn with_catalog(topic: &str, catalog: Arc<InMemoryCatalog>) -> Self {
        Self::assemble(
            topic,
            Adapters {
                catalog,
                ..Adapters::default()
            },
        )
    }

    /// Projects the newest event of `stream_id` so reads issued right after
    /// a command observe it.
    pub async fn project_latest(&self, stream_id: &str) -> anyhow::Result<()> {
        let stream = self
            .event_store
            .load(stream_id)
            .await
            .with_context(|| format!("loading {stream_id} for projection"))?;
        let Some((version, event)) = stream.latest() else {
            return Ok(());
        };
        self.projector.apply_one(stream_id, version, event).await
    }
}

#[cfg(test)]
mod app_state_tests {
    use super::*;
    use crate::modules::time_entries::core::duration::DurationInput;
    use crate::modules::time_entries::use_cases::register_time_entry::command::RegisterTimeEntry;
    use crate::tests::fixtures::actors::{TENANT_ID, USER_ID, owner};
    use chrono::NaiveDate;

    #[tokio::test]
    async fn it_should_make_a_registered_entry_visible_after_projecting() {
        let state = AppState::in_memory("time-entries");
        let command = RegisterTimeEntry {
            time_entry_id: "te-state-1".into(),
            project_id: None,
            date: NaiveDate::from_ymd_opt(2024, 3, 15).unwrap(),
            duration: DurationInput::Minutes(45),
            start_time: None,
            end_time: None,
            description: "Inbox triage".into(),
            billable: true,
            requested_at: 1_700_000_000_000,
        };

        let stream_id = state.register_handler.handle(&owner(), command).await.unwrap();
        state.project_latest(&stream_id).await.unwrap();

        let list = state
            .queries
            .list_by_user_id(TENANT_ID, USER_ID, 0, 10, true)
            .await
            .unwrap();
        assert_eq!(list.len(), 1);
        assert_eq!(list[0].duration_label, "45m");
    }

    #[tokio::test]
    async fn it_should_ignore_an_empty_stream() {
        let state = AppState::in_memory("time-entries");
        state.project_latest("TimeEntry-missing").await.unwrap();
    }
}
