// Root event enumeration for a time entry stream. Versioned payloads live in
// events/v1. Prefer additive changes; a breaking change gets a new version
// and a new variant, historical events keep their meaning.

pub mod v1 {
    pub mod time_entry_deleted;
    pub mod time_entry_registered;
    pub mod time_entry_updated;
}

use v1::time_entry_deleted::TimeEntryDeletedV1;
use v1::time_entry_registered::TimeEntryRegisteredV1;
use v1::time_entry_updated::TimeEntryUpdatedV1;

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize, PartialEq, Eq)]
#[serde(tag = "type")]
pub enum TimeEntryEvent {
    TimeEntryRegisteredV1(TimeEntryRegisteredV1),
    TimeEntryUpdatedV1(TimeEntryUpdatedV1),
    TimeEntryDeletedV1(TimeEntryDeletedV1),
}

impl TimeEntryEvent {
    pub fn time_entry_id(&self) -> &str {
        match self {
            TimeEntryEvent::TimeEntryRegisteredV1(e) => &e.time_entry_id,
            TimeEntryEvent::TimeEntryUpdatedV1(e) => &e.time_entry_id,
            TimeEntryEvent::TimeEntryDeletedV1(e) => &e.time_entry_id,
        }
    }
}
