use axum::{
    extract::{Path, State},
    http::StatusCode,
};

use crate::modules::access::core::policy::Actor;
use crate::modules::time_entries::use_cases::delete_time_entry::command::DeleteTimeEntry;
use crate::shared::core::primitives::now_millis;
use crate::shared::inbound::http_error::ApiError;
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    actor: Actor,
    Path(time_entry_id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let command = DeleteTimeEntry {
        time_entry_id,
        requested_at: now_millis(),
    };
    let stream_id = state.delete_handler.handle(&actor, command).await?;
    state
        .project_latest(&stream_id)
        .await
        .map_err(|e| ApiError::internal(e.to_string()))?;
    Ok(StatusCode::NO_CONTENT)
}
