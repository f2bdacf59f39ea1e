use axum::{
    Json,
    extract::{Query, State},
};
use serde::Deserialize;

use crate::modules::access::core::policy::{Action, Actor, Owned, authorize};
use crate::modules::time_entries::use_cases::list_time_entries_by_user::projection::TimeEntryView;
use crate::shared::inbound::http_error::ApiError;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct ListTimeEntriesParams {
    /// Defaults to the acting user.
    pub user_id: Option<String>,
    pub offset: Option<u64>,
    pub limit: Option<u64>,
    pub sort_desc: Option<bool>,
}

pub async fn handle(
    State(state): State<AppState>,
    actor: Actor,
    Query(params): Query<ListTimeEntriesParams>,
) -> Result<Json<Vec<TimeEntryView>>, ApiError> {
    let user_id = params.user_id.unwrap_or_else(|| actor.user_id.clone());
    authorize(
        &actor,
        Action::ViewTimeEntries(Owned {
            tenant_id: &actor.tenant_id,
            owner_id: &user_id,
        }),
    )
    .map_err(|_| ApiError::forbidden())?;

    let entries = state
        .queries
        .list_by_user_id(
            &actor.tenant_id,
            &user_id,
            params.offset.unwrap_or(0),
            params.limit.unwrap_or(20),
            params.sort_desc.unwrap_or(true),
        )
        .await
        .map_err(|e| ApiError::internal(e.to_string()))?;
    Ok(Json(entries))
}
