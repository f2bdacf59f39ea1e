use async_graphql::{Context, ID, Object, Result as GqlResult};

use crate::modules::access::core::policy::Actor;
use crate::modules::time_entries::core::duration::DurationInput;
use crate::modules::time_entries::use_cases::register_time_entry::command::RegisterTimeEntry;
use crate::shared::core::primitives::{new_id, now_millis};
use crate::shared::inbound::http_error::ApiError;
use crate::shell::graphql::parse_day;
use crate::shell::state::AppState;

#[derive(Default)]
pub struct RegisterTimeEntryMutation;

#[Object]
impl RegisterTimeEntryMutation {
    async fn register_time_entry(
        &self,
        context: &Context<'_>,
        project_id: Option<String>,
        date: String,
        duration: String,
        start_time: Option<String>,
        end_time: Option<String>,
        description: String,
        billable: Option<bool>,
    ) -> GqlResult<ID> {
        let state = context.data_unchecked::<AppState>();
        let actor = context.data::<Actor>()?;

        let command = RegisterTimeEntry {
            time_entry_id: new_id(),
            project_id,
            date: parse_day(&date)?,
            duration: DurationInput::Text(duration),
            start_time,
            end_time,
            description,
            billable: billable.unwrap_or(true),
            requested_at: now_millis(),
        };
        let time_entry_id = command.time_entry_id.clone();

        let stream_id = state
            .register_handler
            .handle(actor, command)
            .await
            .map_err(ApiError::from)?;

        // Inline projection so queries see the new row immediately
        state.project_latest(&stream_id).await?;

        Ok(ID(time_entry_id))
    }
}
