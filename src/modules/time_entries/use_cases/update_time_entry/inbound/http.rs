use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::modules::access::core::policy::Actor;
use crate::modules::time_entries::core::duration::DurationInput;
use crate::modules::time_entries::use_cases::update_time_entry::command::UpdateTimeEntry;
use crate::shared::core::primitives::now_millis;
use crate::shared::inbound::http_error::ApiError;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct UpdateTimeEntryBody {
    pub project_id: Option<String>,
    pub date: NaiveDate,
    pub duration: DurationInput,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub description: String,
    pub billable: bool,
}

#[derive(Serialize)]
pub struct UpdateTimeEntryResponse {
    pub time_entry_id: String,
}

pub async fn handle(
    State(state): State<AppState>,
    actor: Actor,
    Path(time_entry_id): Path<String>,
    body: Result<Json<UpdateTimeEntryBody>, JsonRejection>,
) -> Result<Json<UpdateTimeEntryResponse>, ApiError> {
    let Json(body) = body.map_err(|e| ApiError::unprocessable(e.body_text()))?;

    let command = UpdateTimeEntry {
        time_entry_id: time_entry_id.clone(),
        project_id: body.project_id,
        date: body.date,
        duration: body.duration,
        start_time: body.start_time,
        end_time: body.end_time,
        description: body.description,
        billable: body.billable,
        requested_at: now_millis(),
    };

    let stream_id = state.update_handler.handle(&actor, command).await?;
    state
        .project_latest(&stream_id)
        .await
        .map_err(|e| ApiError::internal(e.to_string()))?;

    Ok(Json(UpdateTimeEntryResponse { time_entry_id }))
}
