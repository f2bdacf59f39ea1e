// Errors and stream plumbing shared by the time entry command handlers.

use crate::modules::time_entries::adapters::outbound::intent_outbox::dispatch_intents;
use crate::modules::time_entries::core::decision::{DecideError, Decision};
use crate::modules::time_entries::core::events::TimeEntryEvent;
use crate::modules::time_entries::core::evolve::evolve;
use crate::modules::time_entries::core::state::TimeEntryState;
use crate::shared::inbound::http_error::ApiError;
use crate::shared::infrastructure::event_store::{EventStore, EventStoreError};
use crate::shared::infrastructure::intent_outbox::{DomainOutbox, OutboxError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error(transparent)]
    EventStore(#[from] EventStoreError),

    #[error(transparent)]
    Outbox(#[from] OutboxError),

    #[error("domain rejected: {0}")]
    Domain(DecideError),

    #[error("dependency failed: {0}")]
    Dependency(#[from] anyhow::Error),
}

/// Folded state of one stream and the version it was read at.
pub struct LoadedState {
    pub state: TimeEntryState,
    pub version: i64,
}

pub async fn load_state<TEventStore>(
    event_store: &TEventStore,
    stream_id: &str,
) -> Result<LoadedState, ApplicationError>
where
    TEventStore: EventStore<TimeEntryEvent> + ?Sized,
{
    let stream = event_store.load(stream_id).await?;
    let state = stream
        .events
        .into_iter()
        .fold(TimeEntryState::None, evolve);
    Ok(LoadedState {
        state,
        version: stream.version,
    })
}

/// Appends the accepted events at `expected_version`, then hands the intents
/// to the outbox. A rejection is returned as `ApplicationError::Domain`.
pub async fn commit<TEventStore, TOutbox>(
    event_store: &TEventStore,
    outbox: &TOutbox,
    topic: &str,
    stream_id: &str,
    expected_version: i64,
    decision: Decision,
) -> Result<(), ApplicationError>
where
    TEventStore: EventStore<TimeEntryEvent> + ?Sized,
    TOutbox: DomainOutbox,
{
    match decision {
        Decision::Accepted { events, intents } => {
            event_store
                .append(stream_id, expected_version, &events)
                .await?;
            dispatch_intents(outbox, stream_id, expected_version, topic, intents).await?;
            Ok(())
        }
        Decision::Rejected { reason } => Err(ApplicationError::Domain(reason)),
    }
}

impl From<ApplicationError> for ApiError {
    fn from(error: ApplicationError) -> Self {
        match error {
            ApplicationError::Domain(reason) => match reason {
                DecideError::AlreadyExists => ApiError::conflict(reason.to_string()),
                DecideError::NotFound => ApiError::not_found(reason.to_string()),
                DecideError::UnknownProject => ApiError::unprocessable(reason.to_string()),
                DecideError::Forbidden(_) => ApiError::forbidden(),
                DecideError::Invalid(invalid) => ApiError::unprocessable(invalid.to_string()),
                DecideError::Collision {
                    existing_time_entry_id,
                } => ApiError::collision(existing_time_entry_id),
            },
            ApplicationError::EventStore(EventStoreError::VersionMismatch { .. }) => {
                ApiError::conflict("time entry was changed concurrently")
            }
            ApplicationError::Outbox(OutboxError::Duplicate { .. }) => {
                ApiError::conflict(error.to_string())
            }
            ApplicationError::EventStore(_)
            | ApplicationError::Outbox(_)
            | ApplicationError::Dependency(_) => ApiError::internal(error.to_string()),
        }
    }
}

#[cfg(test)]
mod application_error_tests {
    use super::*;
    use crate::modules::access::core::policy::PolicyError;
    use crate::modules::time_entries::core::validation::ValidationError;
    use axum::http::StatusCode;
    use rstest::rstest;

    #[rstest]
    #[case(ApplicationError::Domain(DecideError::AlreadyExists), StatusCode::CONFLICT)]
    #[case(ApplicationError::Domain(DecideError::NotFound), StatusCode::NOT_FOUND)]
    #[case(
        ApplicationError::Domain(DecideError::Forbidden(PolicyError::NotOwner)),
        StatusCode::FORBIDDEN
    )]
    #[case(
        ApplicationError::Domain(DecideError::Invalid(ValidationError::DurationTooShort)),
        StatusCode::UNPROCESSABLE_ENTITY
    )]
    #[case(
        ApplicationError::Domain(DecideError::Collision { existing_time_entry_id: "te-1".into() }),
        StatusCode::CONFLICT
    )]
    #[case(
        ApplicationError::EventStore(EventStoreError::VersionMismatch { expected: 0, actual: 1 }),
        StatusCode::CONFLICT
    )]
    #[case(
        ApplicationError::EventStore(EventStoreError::Backend("down".into())),
        StatusCode::INTERNAL_SERVER_ERROR
    )]
    #[case(
        ApplicationError::Dependency(anyhow::anyhow!("catalog offline")),
        StatusCode::INTERNAL_SERVER_ERROR
    )]
    fn it_should_map_application_errors_to_statuses(
        #[case] error: ApplicationError,
        #[case] expected: StatusCode,
    ) {
        assert_eq!(ApiError::from(error).status(), expected);
    }
}
