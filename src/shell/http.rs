use axum::{
    Extension, Router,
    routing::{get, post, put},
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::modules::catalog::use_cases::manage_catalog::inbound::http as catalog_http;
use crate::modules::invoicing::use_cases::manage_invoice_items::inbound::http as invoice_items_http;
use crate::modules::invoicing::use_cases::summarize_billable_time::inbound::http as billing_http;
use crate::modules::time_entries::use_cases::delete_time_entry::inbound::http as delete_http;
use crate::modules::time_entries::use_cases::list_time_entries_by_user::inbound::http as list_http;
use crate::modules::time_entries::use_cases::reconcile_time_fields::inbound::http as reconcile_http;
use crate::modules::time_entries::use_cases::register_time_entry::inbound::http as register_http;
use crate::modules::time_entries::use_cases::update_time_entry::inbound::http as update_http;
use crate::shell::graphql::{GRAPHQL_PATH, build_schema, graphiql, graphql};
use crate::shell::state::AppState;

pub fn router(state: AppState) -> Router {
    let schema = build_schema(state.clone());

    Router::new()
        .route(
            "/time-entries",
            post(register_http::handle).get(list_http::handle),
        )
        .route(
            "/time-entries/{time_entry_id}",
            put(update_http::handle).delete(delete_http::handle),
        )
        .route(
            "/time-entries/reconcile",
            post(reconcile_http::reconcile_fields),
        )
        .route("/durations/parse", get(reconcile_http::parse))
        .route(
            "/clients",
            post(catalog_http::create_client).get(catalog_http::list_clients),
        )
        .route(
            "/projects",
            post(catalog_http::create_project).get(catalog_http::list_projects),
        )
        .route(
            "/projects/{project_id}/members",
            get(catalog_http::list_members),
        )
        .route(
            "/projects/{project_id}/members/{user_id}",
            put(catalog_http::put_member).delete(catalog_http::delete_member),
        )
        .route(
            "/invoice-items",
            post(invoice_items_http::create).get(invoice_items_http::list),
        )
        .route(
            "/invoice-items/{invoice_item_id}",
            axum::routing::delete(invoice_items_http::delete),
        )
        .route("/billing/summary", get(billing_http::summary))
        .route(
            "/billing/draft-invoice-items",
            post(billing_http::draft_invoice_items),
        )
        .route(GRAPHQL_PATH, get(graphiql).post(graphql))
        .layer(Extension(schema))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}
