use axum::{
    Json,
    extract::{Query, State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};
use chrono::NaiveDate;
use serde::Deserialize;

use crate::modules::access::core::policy::Actor;
use crate::shared::inbound::http_error::ApiError;
use crate::shell::state::AppState;

/// Query string of the summary and body of the draft request.
#[derive(Deserialize)]
pub struct BillingRange {
    pub user_id: Option<String>,
    pub from: NaiveDate,
    pub to: NaiveDate,
}

pub async fn summary(
    State(state): State<AppState>,
    actor: Actor,
    Query(range): Query<BillingRange>,
) -> Result<impl IntoResponse, ApiError> {
    let user_id = range.user_id.unwrap_or_else(|| actor.user_id.clone());
    let summary = state
        .billing
        .summarize(&actor, &user_id, range.from, range.to)
        .await?;
    Ok(Json(summary))
}

pub async fn draft_invoice_items(
    State(state): State<AppState>,
    actor: Actor,
    body: Result<Json<BillingRange>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(range) = body.map_err(|e| ApiError::unprocessable(e.body_text()))?;
    let user_id = range.user_id.unwrap_or_else(|| actor.user_id.clone());
    let items = state
        .billing
        .draft_invoice_items(&actor, &user_id, range.from, range.to)
        .await?;
    Ok((StatusCode::CREATED, Json(items)))
}
