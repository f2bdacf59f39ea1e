use crate::shared::infrastructure::event_store::{EventStore, EventStoreError, LoadedStream};
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;
use tokio::sync::RwLock;

/// Streams kept in a map, with optimistic concurrency on the stream length.
pub struct InMemoryEventStore<Event: Clone + Send + Sync + 'static> {
    inner: RwLock<HashMap<String, Vec<Event>>>,
    is_offline: bool,
    delay_append_ms: AtomicU64,
}

impl<Event: Clone + Send + Sync + 'static> Default for InMemoryEventStore<Event> {
    fn default() -> Self {
        Self {
            inner: RwLock::new(HashMap::new()),
            is_offline: false,
            delay_append_ms: AtomicU64::new(0),
        }
    }
}

impl<Event: Clone + Send + Sync + 'static> InMemoryEventStore<Event> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    /// Widens the window between the version check and the write so tests
    /// can race two appends against the same stream.
    pub fn set_delay_append_ms(&self, delay: u64) {
        self.delay_append_ms.store(delay, Ordering::Relaxed);
    }

    fn ensure_online(&self) -> Result<(), EventStoreError> {
        if self.is_offline {
            return Err(EventStoreError::Backend("Event store offline".into()));
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl<Event> EventStore<Event> for InMemoryEventStore<Event>
where
    Event: Clone + Send + Sync + 'static,
{
    async fn load(&self, stream_id: &str) -> Result<LoadedStream<Event>, EventStoreError> {
        self.ensure_online()?;
        let guard = self.inner.read().await;
        let events = guard.get(stream_id).cloned().unwrap_or_default();
        let version = events.len() as i64;
        Ok(LoadedStream { events, version })
    }

    async fn append(
        &self,
        stream_id: &str,
        expected_version: i64,
        new_events: &[Event],
    ) -> Result<(), EventStoreError> {
        self.ensure_online()?;
        let delay = self.delay_append_ms.load(Ordering::Relaxed);
        if delay > 0 {
            tokio::time::sleep(Duration::from_millis(delay)).await;
        }

        let mut guard = self.inner.write().await;
        let entry = guard.entry(stream_id.to_string()).or_default();
        let actual = entry.len() as i64;
        if actual != expected_version {
            return Err(EventStoreError::VersionMismatch {
                expected: expected_version,
                actual,
            });
        }
        entry.extend_from_slice(new_events);
        Ok(())
    }
}

#[cfg(test)]
mod in_memory_event_store_tests {
    use super::*;
    use crate::tests::fixtures::events::domain_event::DomainEvent;
    use rstest::rstest;

    #[rstest]
    #[tokio::test]
    async fn it_should_append_and_load_an_event() {
        let store = InMemoryEventStore::<DomainEvent>::new();
        store
            .append("1", 0, &[DomainEvent { name: "test" }])
            .await
            .expect("expected to append to the event_store");
        let stream = store
            .load("1")
            .await
            .expect("expected to load from the event_store");
        assert_eq!(stream.version, 1);
        assert_eq!(stream.events[0].name, "test");
        assert_eq!(stream.latest().map(|(v, e)| (v, e.name)), Some((1, "test")));
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_load_an_empty_stream_at_version_zero() {
        let store = InMemoryEventStore::<DomainEvent>::new();
        let stream = store.load("missing").await.unwrap();
        assert_eq!(stream.version, 0);
        assert!(!stream.exists());
        assert!(stream.latest().is_none());
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_fail_to_append_if_the_wrong_version_is_expected() {
        let store = InMemoryEventStore::<DomainEvent>::new();
        let result = store.append("1", 1, &[DomainEvent { name: "test" }]).await;
        match result {
            Err(EventStoreError::VersionMismatch { expected, actual }) => {
                assert_eq!(expected, 1);
                assert_eq!(actual, 0);
            }
            other => panic!("expected VersionMismatch error, got {other:?}"),
        }
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_fail_when_offline() {
        let mut store = InMemoryEventStore::<DomainEvent>::new();
        store.toggle_offline();
        let result = store.load("1").await;
        assert!(matches!(result, Err(EventStoreError::Backend(_))));
    }
}
