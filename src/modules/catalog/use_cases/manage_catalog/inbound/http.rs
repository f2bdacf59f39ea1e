use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;

use crate::modules::access::core::policy::Actor;
use crate::modules::catalog::use_cases::manage_catalog::handler::{
    CatalogError, NewClient, NewProject,
};
use crate::shared::inbound::http_error::ApiError;
use crate::shell::state::AppState;

impl From<CatalogError> for ApiError {
    fn from(error: CatalogError) -> Self {
        match error {
            CatalogError::Forbidden(_) => ApiError::forbidden(),
            CatalogError::Invalid(message) => ApiError::unprocessable(message),
            CatalogError::DuplicateClient(_) => ApiError::conflict(error.to_string()),
            CatalogError::NotFound(_) => ApiError::not_found(error.to_string()),
            CatalogError::Repository(e) => ApiError::internal(e.to_string()),
        }
    }
}

#[derive(Deserialize)]
pub struct MemberBody {
    pub hourly_rate_cents: i64,
}

pub async fn create_client(
    State(state): State<AppState>,
    actor: Actor,
    body: Result<Json<NewClient>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(body) = body.map_err(|e| ApiError::unprocessable(e.body_text()))?;
    let client = state.catalog.create_client(&actor, body).await?;
    Ok((StatusCode::CREATED, Json(client)))
}

pub async fn list_clients(
    State(state): State<AppState>,
    actor: Actor,
) -> Result<impl IntoResponse, ApiError> {
    Ok(Json(state.catalog.list_clients(&actor).await?))
}

pub async fn create_project(
    State(state): State<AppState>,
    actor: Actor,
    body: Result<Json<NewProject>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(body) = body.map_err(|e| ApiError::unprocessable(e.body_text()))?;
    let project = state.catalog.create_project(&actor, body).await?;
    Ok((StatusCode::CREATED, Json(project)))
}

pub async fn list_projects(
    State(state): State<AppState>,
    actor: Actor,
) -> Result<impl IntoResponse, ApiError> {
    Ok(Json(state.catalog.list_projects(&actor).await?))
}

pub async fn put_member(
    State(state): State<AppState>,
    actor: Actor,
    Path((project_id, user_id)): Path<(String, String)>,
    body: Result<Json<MemberBody>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(body) = body.map_err(|e| ApiError::unprocessable(e.body_text()))?;
    let member = state
        .catalog
        .add_member(&actor, &project_id, &user_id, body.hourly_rate_cents)
        .await?;
    Ok(Json(member))
}

pub async fn delete_member(
    State(state): State<AppState>,
    actor: Actor,
    Path((project_id, user_id)): Path<(String, String)>,
) -> Result<StatusCode, ApiError> {
    state
        .catalog
        .remove_member(&actor, &project_id, &user_id)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn list_members(
    State(state): State<AppState>,
    actor: Actor,
    Path(project_id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    Ok(Json(state.catalog.list_members(&actor, &project_id).await?))
}
