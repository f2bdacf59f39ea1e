// Event store port. One stream per time entry; appends are guarded by the
// version the caller last read.

use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EventStoreError {
    #[error("stream changed concurrently: expected v{expected}, found v{actual}")]
    VersionMismatch { expected: i64, actual: i64 },

    #[error("event store unavailable: {0}")]
    Backend(String),
}

/// Events of one stream in append order. `version` is the number of events
/// and 0 for a stream that does not exist yet.
#[derive(Debug, Clone)]
pub struct LoadedStream<E> {
    pub events: Vec<E>,
    pub version: i64,
}

impl<E> LoadedStream<E> {
    pub fn exists(&self) -> bool {
        self.version > 0
    }

    /// Newest event together with the version it was appended at.
    pub fn latest(&self) -> Option<(i64, &E)> {
        self.events.last().map(|event| (self.version, event))
    }
}

#[async_trait]
pub trait EventStore<Event: Clone + Send + Sync + 'static>: Send + Sync {
    async fn load(&self, stream_id: &str) -> Result<LoadedStream<Event>, EventStoreError>;
    async fn append(
        &self,
        stream_id: &str,
        expected_version: i64,
        new_events: &[Event],
    ) -> Result<(), EventStoreError>;
}

pub mod in_memory;
