use crate::modules::access::core::policy::{Action, Actor, PolicyError, authorize};
use crate::modules::catalog::core::ports::ProjectMembership;
use crate::modules::time_entries::core::collision::{DatedEntry, find_collision};
use crate::modules::time_entries::core::events::TimeEntryEvent;
use crate::modules::time_entries::core::intents::TimeEntryIntent;
use crate::modules::time_entries::core::validation::ValidationError;
use crate::shared::core::primitives::EpochMillis;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DecideError {
    #[error("time entry already exists")]
    AlreadyExists,

    #[error("time entry not found")]
    NotFound,

    #[error("project not found")]
    UnknownProject,

    #[error("not allowed: {0}")]
    Forbidden(#[from] PolicyError),

    #[error("invalid time entry: {0}")]
    Invalid(#[from] ValidationError),

    #[error("a time entry already exists for this project and date: {existing_time_entry_id}")]
    Collision { existing_time_entry_id: String },
}

#[derive(Debug, PartialEq, Eq)]
pub enum Decision {
    Accepted {
        events: Vec<TimeEntryEvent>,
        intents: Vec<TimeEntryIntent>,
    },
    Rejected {
        reason: DecideError,
    },
}

impl From<Result<(Vec<TimeEntryEvent>, Vec<TimeEntryIntent>), DecideError>> for Decision {
    fn from(result: Result<(Vec<TimeEntryEvent>, Vec<TimeEntryIntent>), DecideError>) -> Self {
        match result {
            Ok((events, intents)) => Decision::Accepted { events, intents },
            Err(reason) => Decision::Rejected { reason },
        }
    }
}

/// What a decider needs to know beyond the stream itself. Loaded by the
/// handler before deciding.
pub struct DecideContext<'a, E: DatedEntry> {
    pub actor: &'a Actor,
    pub project: &'a ProjectMembership,
    /// The owner's live entries on the target day.
    pub same_day_entries: &'a [E],
}

impl<E: DatedEntry> DecideContext<'_, E> {
    pub fn authorize_project(&self) -> Result<(), DecideError> {
        if *self.project == ProjectMembership::UnknownProject {
            return Err(DecideError::UnknownProject);
        }
        authorize(
            self.actor,
            Action::LogTime {
                is_project_member: self.project.is_member(),
            },
        )?;
        Ok(())
    }

    pub fn ensure_no_collision(
        &self,
        project_id: Option<&str>,
        date: EpochMillis,
        editing_id: Option<&str>,
    ) -> Result<(), DecideError> {
        match find_collision(project_id, date, editing_id, self.same_day_entries) {
            Some(existing) => Err(DecideError::Collision {
                existing_time_entry_id: existing.time_entry_id().to_string(),
            }),
            None => Ok(()),
        }
    }
}
