use async_graphql::{Context, ID, Object, Result as GqlResult};

use crate::modules::access::core::policy::Actor;
use crate::modules::time_entries::core::duration::DurationInput;
use crate::modules::time_entries::use_cases::update_time_entry::command::UpdateTimeEntry;
use crate::shared::core::primitives::now_millis;
use crate::shared::inbound::http_error::ApiError;
use crate::shell::graphql::parse_day;
use crate::shell::state::AppState;

#[derive(Default)]
pub struct UpdateTimeEntryMutation;

#[Object]
impl UpdateTimeEntryMutation {
    async fn update_time_entry(
        &self,
        context: &Context<'_>,
        time_entry_id: ID,
        project_id: Option<String>,
        date: String,
        duration: String,
        start_time: Option<String>,
        end_time: Option<String>,
        description: String,
        billable: bool,
    ) -> GqlResult<ID> {
        let state = context.data_unchecked::<AppState>();
        let actor = context.data::<Actor>()?;

        let command = UpdateTimeEntry {
            time_entry_id: time_entry_id.to_string(),
            project_id,
            date: parse_day(&date)?,
            duration: DurationInput::Text(duration),
            start_time,
            end_time,
            description,
            billable,
            requested_at: now_millis(),
        };

        let stream_id = state
            .update_handler
            .handle(actor, command)
            .await
            .map_err(ApiError::from)?;
        state.project_latest(&stream_id).await?;

        Ok(time_entry_id)
    }
}
