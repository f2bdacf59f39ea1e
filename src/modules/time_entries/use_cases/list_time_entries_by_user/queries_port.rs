use crate::modules::time_entries::use_cases::list_time_entries_by_user::projection::TimeEntryView;
use async_trait::async_trait;

/// Read side of the time entry read model. Deleted entries are never returned.
#[async_trait]
pub trait TimeEntryQueries: Send + Sync {
    async fn list_by_user_id(
        &self,
        tenant_id: &str,
        user_id: &str,
        offset: u64,
        limit: u64,
        sort_by_date_desc: bool,
    ) -> anyhow::Result<Vec<TimeEntryView>>;

    /// Entries of one user on the calendar day of `date`.
    async fn list_by_user_on_day(
        &self,
        tenant_id: &str,
        user_id: &str,
        date: i64,
    ) -> anyhow::Result<Vec<TimeEntryView>>;

    /// Entries of one user whose day lies within `from..=to`, oldest first.
    async fn list_by_user_between(
        &self,
        tenant_id: &str,
        user_id: &str,
        from: i64,
        to: i64,
    ) -> anyhow::Result<Vec<TimeEntryView>>;
}
