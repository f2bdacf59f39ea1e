use async_graphql::{Context, ID, Object, Result as GqlResult};

use crate::modules::access::core::policy::Actor;
use crate::modules::time_entries::use_cases::delete_time_entry::command::DeleteTimeEntry;
use crate::shared::core::primitives::now_millis;
use crate::shared::inbound::http_error::ApiError;
use crate::shell::state::AppState;

#[derive(Default)]
pub struct DeleteTimeEntryMutation;

#[Object]
impl DeleteTimeEntryMutation {
    async fn delete_time_entry(&self, context: &Context<'_>, time_entry_id: ID) -> GqlResult<bool> {
        let state = context.data_unchecked::<AppState>();
        let actor = context.data::<Actor>()?;

        let command = DeleteTimeEntry {
            time_entry_id: time_entry_id.to_string(),
            requested_at: now_millis(),
        };
        let stream_id = state
            .delete_handler
            .handle(actor, command)
            .await
            .map_err(ApiError::from)?;
        state.project_latest(&stream_id).await?;

        Ok(true)
    }
}
