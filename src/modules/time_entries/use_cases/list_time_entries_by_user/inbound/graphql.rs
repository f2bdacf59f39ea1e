use async_graphql::{Context, Object, Result as GqlResult};

use crate::modules::access::core::policy::{Action, Actor, Owned, authorize};
use crate::modules::time_entries::use_cases::list_time_entries_by_user::projection::TimeEntryView;
use crate::modules::time_entries::use_cases::list_time_entries_by_user::queries_port::TimeEntryQueries;
use crate::shared::inbound::http_error::ApiError;
use crate::shell::state::AppState;

#[derive(async_graphql::SimpleObject, Clone)]
pub struct GqlTimeEntry {
    pub time_entry_id: String,
    pub user_id: String,
    pub project_id: Option<String>,
    pub day: String,
    pub duration_minutes: u32,
    pub duration_label: String,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub description: String,
    pub billable: bool,
    pub created_at: i64,
    pub updated_at: i64,
}

impl From<TimeEntryView> for GqlTimeEntry {
    fn from(v: TimeEntryView) -> Self {
        Self {
            time_entry_id: v.time_entry_id,
            user_id: v.user_id,
            project_id: v.project_id,
            day: v.day,
            duration_minutes: v.duration_minutes,
            duration_label: v.duration_label,
            start_time: v.start_time,
            end_time: v.end_time,
            description: v.description,
            billable: v.billable,
            created_at: v.created_at,
            updated_at: v.updated_at,
        }
    }
}

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    async fn time_entries(
        &self,
        context: &Context<'_>,
        user_id: Option<String>,
        offset: Option<i64>,
        limit: Option<i64>,
        sort_desc: Option<bool>,
    ) -> GqlResult<Vec<GqlTimeEntry>> {
        let state = context.data_unchecked::<AppState>();
        let actor = context.data::<Actor>()?;
        let user_id = user_id.unwrap_or_else(|| actor.user_id.clone());
        authorize(
            actor,
            Action::ViewTimeEntries(Owned {
                tenant_id: &actor.tenant_id,
                owner_id: &user_id,
            }),
        )
        .map_err(|_| ApiError::forbidden())?;

        let list = state
            .queries
            .list_by_user_id(
                &actor.tenant_id,
                &user_id,
                offset.unwrap_or(0).max(0) as u64,
                limit.unwrap_or(20).max(0) as u64,
                sort_desc.unwrap_or(true),
            )
            .await?;
        Ok(list.into_iter().map(Into::into).collect())
    }
}
