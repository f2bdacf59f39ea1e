// Outbox port. Accepted decisions leave intents here; a relay outside this
// crate publishes them on `topic`.

use async_trait::async_trait;
use serde_json::Value as Json;
use thiserror::Error;

/// One intent ready for publishing. `(stream_id, stream_version)` identifies
/// it; the same version is never enqueued twice.
#[derive(Debug, Clone)]
pub struct OutboxRow {
    pub topic: String,
    pub event_type: String,
    pub event_version: i32,
    pub stream_id: String,
    pub stream_version: i64,
    pub occurred_at: i64,
    pub payload: Json,
}

impl OutboxRow {
    pub fn key(&self) -> (String, i64) {
        (self.stream_id.clone(), self.stream_version)
    }

    /// Consumers read the payload as a JSON object keyed by field name.
    pub fn validate(&self) -> Result<(), OutboxError> {
        if self.topic.trim().is_empty() {
            return Err(OutboxError::Validation("topic is empty".into()));
        }
        if self.event_type.trim().is_empty() {
            return Err(OutboxError::Validation("event type is empty".into()));
        }
        if !self.payload.is_object() {
            return Err(OutboxError::Validation(format!(
                "{} payload is not an object",
                self.event_type
            )));
        }
        Ok(())
    }
}

#[derive(Debug, Error)]
pub enum OutboxError {
    #[error("duplicate outbox row for stream {stream_id} v{stream_version}")]
    Duplicate {
        stream_id: String,
        stream_version: i64,
    },

    #[error("invalid outbox row: {0}")]
    Validation(String),

    #[error("outbox unavailable: {0}")]
    Backend(String),
}

#[async_trait]
pub trait DomainOutbox: Send + Sync {
    async fn enqueue(&self, row: OutboxRow) -> Result<(), OutboxError>;
}

pub mod in_memory;
