// In memory projection repository, watermark repository and query side.
// Rows are keyed by time entry id; the watermark tracks the last event each
// projector has applied.

use crate::modules::time_entries::adapters::outbound::projections::{
    TimeEntryProjectionRepository, WatermarkRepository,
};
use crate::modules::time_entries::use_cases::list_time_entries_by_user::projection::{
    TimeEntryRow, TimeEntryView,
};
use crate::modules::time_entries::use_cases::list_time_entries_by_user::queries_port::TimeEntryQueries;
use crate::shared::core::calendar_date::{from_stored_millis, same_calendar_day};
use std::collections::HashMap;
use tokio::sync::RwLock;

#[derive(Default)]
pub struct InMemoryProjections {
    rows: RwLock<HashMap<String, TimeEntryRow>>,
    watermark: RwLock<HashMap<String, String>>,
    is_offline: bool,
}

impl InMemoryProjections {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    fn ensure_online(&self, what: &str) -> anyhow::Result<()> {
        if self.is_offline {
            anyhow::bail!("{what} offline");
        }
        Ok(())
    }

    async fn live_rows_of<F>(&self, tenant_id: &str, user_id: &str, keep: F) -> Vec<TimeEntryRow>
    where
        F: Fn(&TimeEntryRow) -> bool,
    {
        self.rows
            .read()
            .await
            .values()
            .filter(|row| {
                row.tenant_id == tenant_id
                    && row.user_id == user_id
                    && row.deleted_at.is_none()
                    && keep(row)
            })
            .cloned()
            .collect()
    }
}

#[async_trait::async_trait]
impl TimeEntryProjectionRepository for InMemoryProjections {
    async fn upsert(&self, row: TimeEntryRow) -> anyhow::Result<()> {
        self.ensure_online("Projections repository")?;
        self.rows
            .write()
            .await
            .insert(row.time_entry_id.clone(), row);
        Ok(())
    }

    async fn find(&self, time_entry_id: &str) -> anyhow::Result<Option<TimeEntryRow>> {
        self.ensure_online("Projections repository")?;
        Ok(self.rows.read().await.get(time_entry_id).cloned())
    }
}

#[async_trait::async_trait]
impl WatermarkRepository for InMemoryProjections {
    async fn get(&self, name: &str) -> anyhow::Result<Option<String>> {
        self.ensure_online("Watermark repository")?;
        Ok(self.watermark.read().await.get(name).cloned())
    }

    async fn set(&self, name: &str, last: &str) -> anyhow::Result<()> {
        self.ensure_online("Watermark repository")?;
        self.watermark
            .write()
            .await
            .insert(name.to_string(), last.to_string());
        Ok(())
    }
}

#[async_trait::async_trait]
impl TimeEntryQueries for InMemoryProjections {
    async fn list_by_user_id(
        &self,
        tenant_id: &str,
        user_id: &str,
        offset: u64,
        limit: u64,
        sort_by_date_desc: bool,
    ) -> anyhow::Result<Vec<TimeEntryView>> {
        self.ensure_online("Projections repository")?;
        let mut items = self.live_rows_of(tenant_id, user_id, |_| true).await;

        items.sort_by(|a, b| {
            (a.date, a.created_at, &a.time_entry_id).cmp(&(b.date, b.created_at, &b.time_entry_id))
        });
        if sort_by_date_desc {
            items.reverse();
        }

        Ok(items
            .into_iter()
            .skip(usize::try_from(offset).unwrap_or(usize::MAX))
            .take(usize::try_from(limit).unwrap_or(usize::MAX))
            .map(TimeEntryView::from)
            .collect())
    }

    async fn list_by_user_on_day(
        &self,
        tenant_id: &str,
        user_id: &str,
        date: i64,
    ) -> anyhow::Result<Vec<TimeEntryView>> {
        self.ensure_online("Projections repository")?;
        let mut items = self
            .live_rows_of(tenant_id, user_id, |row| same_calendar_day(row.date, date))
            .await;
        items.sort_by_key(|row| row.created_at);
        Ok(items.into_iter().map(TimeEntryView::from).collect())
    }

    async fn list_by_user_between(
        &self,
        tenant_id: &str,
        user_id: &str,
        from: i64,
        to: i64,
    ) -> anyhow::Result<Vec<TimeEntryView>> {
        self.ensure_online("Projections repository")?;
        let (Some(first_day), Some(last_day)) = (from_stored_millis(from), from_stored_millis(to))
        else {
            anyhow::bail!("invalid date range {from}..{to}");
        };
        let mut items = self
            .live_rows_of(tenant_id, user_id, |row| {
                from_stored_millis(row.date).is_some_and(|day| first_day <= day && day <= last_day)
            })
            .await;
        items.sort_by_key(|row| (row.date, row.created_at));
        Ok(items.into_iter().map(TimeEntryView::from).collect())
    }
}
