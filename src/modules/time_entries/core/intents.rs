use crate::modules::time_entries::core::events::v1::time_entry_deleted::TimeEntryDeletedV1;
use crate::modules::time_entries::core::events::v1::time_entry_registered::TimeEntryRegisteredV1;
use crate::modules::time_entries::core::events::v1::time_entry_updated::TimeEntryUpdatedV1;

/// Domain intents produced by the deciders as part of an Accepted decision.
/// The outbound intent_outbox adapter translates these into OutboxRows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TimeEntryIntent {
    PublishTimeEntryRegistered { payload: TimeEntryRegisteredV1 },
    PublishTimeEntryUpdated { payload: TimeEntryUpdatedV1 },
    PublishTimeEntryDeleted { payload: TimeEntryDeletedV1 },
}
