// Stateless helpers behind the entry form: keep the three time fields
// consistent and preview how a duration text is read.

use axum::{
    Json,
    extract::{Query, rejection::JsonRejection},
};
use serde::{Deserialize, Serialize};

use crate::modules::access::core::policy::Actor;
use crate::modules::time_entries::core::duration::{format_duration, parse_duration};
use crate::modules::time_entries::core::reconcile::{FieldPatch, LastEdited, TimeFields, reconcile};
use crate::shared::inbound::http_error::ApiError;

#[derive(Deserialize)]
pub struct ReconcileBody {
    #[serde(flatten)]
    pub fields: TimeFields,
    #[serde(default)]
    pub last_edited: LastEdited,
}

#[derive(Serialize)]
pub struct ReconcileResponse {
    pub fields: TimeFields,
    pub patch: Option<FieldPatch>,
}

pub async fn reconcile_fields(
    _actor: Actor,
    body: Result<Json<ReconcileBody>, JsonRejection>,
) -> Result<Json<ReconcileResponse>, ApiError> {
    let Json(body) = body.map_err(|e| ApiError::unprocessable(e.body_text()))?;
    let mut fields = body.fields;

    let patch = reconcile(&fields, body.last_edited)
        .map_err(|e| ApiError::unprocessable(e.to_string()))?;
    if let Some(patch) = &patch {
        fields.apply(patch);
    }

    Ok(Json(ReconcileResponse { fields, patch }))
}

#[derive(Deserialize)]
pub struct ParseDurationQuery {
    pub text: String,
}

#[derive(Serialize)]
pub struct ParsedDuration {
    pub text: String,
    pub minutes: u32,
    pub label: String,
}

pub async fn parse(
    _actor: Actor,
    Query(query): Query<ParseDurationQuery>,
) -> Result<Json<ParsedDuration>, ApiError> {
    let minutes = parse_duration(&query.text)
        .ok_or_else(|| ApiError::unprocessable(format!("cannot read duration '{}'", query.text)))?;
    Ok(Json(ParsedDuration {
        label: format_duration(minutes),
        text: query.text,
        minutes,
    }))
}
