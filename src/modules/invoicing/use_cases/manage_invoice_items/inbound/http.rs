use axum::{
    Json,
    extract::{Path, Query, State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;

use crate::modules::access::core::policy::Actor;
use crate::modules::invoicing::use_cases::errors::InvoicingError;
use crate::modules::invoicing::use_cases::manage_invoice_items::handler::NewInvoiceItem;
use crate::shared::inbound::http_error::ApiError;
use crate::shell::state::AppState;

impl From<InvoicingError> for ApiError {
    fn from(error: InvoicingError) -> Self {
        match error {
            InvoicingError::Forbidden(_) => ApiError::forbidden(),
            InvoicingError::Invalid(message) => ApiError::unprocessable(message),
            InvoicingError::NotFound => ApiError::not_found(error.to_string()),
            InvoicingError::Repository(e) => ApiError::internal(e.to_string()),
        }
    }
}

#[derive(Deserialize)]
pub struct ListInvoiceItemsParams {
    pub user_id: Option<String>,
}

pub async fn create(
    State(state): State<AppState>,
    actor: Actor,
    body: Result<Json<NewInvoiceItem>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(body) = body.map_err(|e| ApiError::unprocessable(e.body_text()))?;
    let item = state.invoice_items.create(&actor, body).await?;
    Ok((StatusCode::CREATED, Json(item)))
}

pub async fn list(
    State(state): State<AppState>,
    actor: Actor,
    Query(params): Query<ListInvoiceItemsParams>,
) -> Result<impl IntoResponse, ApiError> {
    let user_id = params.user_id.unwrap_or_else(|| actor.user_id.clone());
    Ok(Json(state.invoice_items.list(&actor, &user_id).await?))
}

pub async fn delete(
    State(state): State<AppState>,
    actor: Actor,
    Path(invoice_item_id): Path<String>,
) -> Result<StatusCode, ApiError> {
    state.invoice_items.delete(&actor, &invoice_item_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
