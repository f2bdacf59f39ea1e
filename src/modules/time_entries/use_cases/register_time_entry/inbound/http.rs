use axum::{Json, extract::State, extract::rejection::JsonRejection, http::StatusCode};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::modules::access::core::policy::Actor;
use crate::modules::time_entries::core::duration::DurationInput;
use crate::modules::time_entries::use_cases::register_time_entry::command::RegisterTimeEntry;
use crate::shared::core::primitives::{new_id, now_millis};
use crate::shared::inbound::http_error::ApiError;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct RegisterTimeEntryBody {
    pub project_id: Option<String>,
    pub date: NaiveDate,
    pub duration: DurationInput,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub description: String,
    #[serde(default = "billable_by_default")]
    pub billable: bool,
}

fn billable_by_default() -> bool {
    true
}

#[derive(Serialize)]
pub struct RegisterTimeEntryResponse {
    pub time_entry_id: String,
}

pub async fn handle(
    State(state): State<AppState>,
    actor: Actor,
    body: Result<Json<RegisterTimeEntryBody>, JsonRejection>,
) -> Result<(StatusCode, Json<RegisterTimeEntryResponse>), ApiError> {
    let Json(body) = body.map_err(|e| ApiError::unprocessable(e.body_text()))?;

    let command = RegisterTimeEntry {
        time_entry_id: new_id(),
        project_id: body.project_id,
        date: body.date,
        duration: body.duration,
        start_time: body.start_time,
        end_time: body.end_time,
        description: body.description,
        billable: body.billable,
        requested_at: now_millis(),
    };
    let time_entry_id = command.time_entry_id.clone();

    let stream_id = state.register_handler.handle(&actor, command).await?;
    state
        .project_latest(&stream_id)
        .await
        .map_err(|e| ApiError::internal(e.to_string()))?;

    Ok((
        StatusCode::CREATED,
        Json(RegisterTimeEntryResponse { time_entry_id }),
    ))
}
