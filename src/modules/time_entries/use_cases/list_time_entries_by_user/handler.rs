use crate::modules::time_entries::adapters::outbound::projections::{
    TimeEntryProjectionRepository, WatermarkRepository,
};
use crate::modules::time_entries::core::events::TimeEntryEvent;
use crate::modules::time_entries::core::projections::{Mutation, apply};
use crate::modules::time_entries::use_cases::list_time_entries_by_user::projection::TimeEntryRow;
use anyhow::Context;
use std::sync::Arc;

/// Applies events to the time entry read model and advances its watermark.
#[derive(Clone)]
pub struct Projector<TRepository, TWatermarkRepository>
where
    TRepository: TimeEntryProjectionRepository + Send + Sync + 'static,
    TWatermarkRepository: WatermarkRepository + Send + Sync + 'static,
{
    pub name: String,
    pub repository: Arc<TRepository>,
    pub watermark_repository: Arc<TWatermarkRepository>,
}

impl<TRepository, TWatermarkRepository> Projector<TRepository, TWatermarkRepository>
where
    TRepository: TimeEntryProjectionRepository + Send + Sync + 'static,
    TWatermarkRepository: WatermarkRepository + Send + Sync + 'static,
{
    pub fn new(
        name: impl Into<String>,
        repository: Arc<TRepository>,
        watermark: Arc<TWatermarkRepository>,
    ) -> Self {
        Self {
            name: name.into(),
            repository,
            watermark_repository: watermark,
        }
    }

    pub async fn apply_one(
        &self,
        stream_id: &str,
        version: i64,
        event: &TimeEntryEvent,
    ) -> anyhow::Result<()> {
        for mutation in apply(stream_id, version, event) {
            match mutation {
                Mutation::Upsert(row) => {
                    let current = self.repository.find(&row.time_entry_id).await?;
                    if current.is_some_and(|current| projected_version(&current) >= version) {
                        tracing::debug!(
                            projector = %self.name,
                            stream_id,
                            version,
                            "stale event skipped"
                        );
                        return Ok(());
                    }
                    self.repository.upsert(row).await?
                }
                Mutation::Update {
                    time_entry_id,
                    changes,
                    updated_at,
                    updated_by,
                    last_event_id,
                } => {
                    let mut row = self.existing_row(&time_entry_id).await?;
                    if projected_version(&row) >= version {
                        tracing::debug!(
                            projector = %self.name,
                            stream_id,
                            version,
                            "stale event skipped"
                        );
                        return Ok(());
                    }
                    row.apply_changes(changes);
                    row.updated_at = updated_at;
                    row.updated_by = updated_by;
                    row.last_event_id = Some(last_event_id);
                    self.repository.upsert(row).await?;
                }
                Mutation::MarkDeleted {
                    time_entry_id,
                    deleted_at,
                    deleted_by,
                    last_event_id,
                } => {
                    let mut row = self.existing_row(&time_entry_id).await?;
                    if projected_version(&row) >= version {
                        tracing::debug!(
                            projector = %self.name,
                            stream_id,
                            version,
                            "stale event skipped"
                        );
                        return Ok(());
                    }
                    row.deleted_at = Some(deleted_at);
                    row.updated_at = deleted_at;
                    row.updated_by = deleted_by;
                    row.last_event_id = Some(last_event_id);
                    self.repository.upsert(row).await?;
                }
            }
        }
        self.watermark_repository
            .set(&self.name, &format!("{stream_id}:{version}"))
            .await?;
        tracing::debug!(projector = %self.name, stream_id, version, "event projected");
        Ok(())
    }

    async fn existing_row(
        &self,
        time_entry_id: &str,
    ) -> anyhow::Result<TimeEntryRow> {
        self.repository
            .find(time_entry_id)
            .await?
            .with_context(|| format!("no projected row for time entry {time_entry_id}"))
    }
}

/// Stream version the row was last projected from; `last_event_id` is
/// `{stream_id}:{version}`.
fn projected_version(row: &TimeEntryRow) -> i64 {
    row.last_event_id
        .as_deref()
        .and_then(|id| id.rsplit_once(':'))
        .and_then(|(_, version)| version.parse().ok())
        .unwrap_or(0)
}
