use async_graphql::{EmptySubscription, MergedObject, Schema};
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{
    Extension,
    response::{Html, IntoResponse},
};
use chrono::NaiveDate;

use crate::modules::access::core::policy::Actor;
use crate::modules::time_entries::use_cases::delete_time_entry::inbound::graphql::DeleteTimeEntryMutation;
use crate::modules::time_entries::use_cases::list_time_entries_by_user::inbound::graphql::QueryRoot;
use crate::modules::time_entries::use_cases::register_time_entry::inbound::graphql::RegisterTimeEntryMutation;
use crate::modules::time_entries::use_cases::update_time_entry::inbound::graphql::UpdateTimeEntryMutation;
use crate::shared::inbound::http_error::ApiError;
use crate::shell::state::AppState;

pub const GRAPHQL_PATH: &str = "/gql";

#[derive(MergedObject, Default)]
pub struct MutationRoot(
    RegisterTimeEntryMutation,
    UpdateTimeEntryMutation,
    DeleteTimeEntryMutation,
);

pub type AppSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

pub fn build_schema(state: AppState) -> AppSchema {
    Schema::build(QueryRoot, MutationRoot::default(), EmptySubscription)
        .data(state)
        .finish()
}

/// Calendar days travel as `YYYY-MM-DD` strings.
pub fn parse_day(value: &str) -> Result<NaiveDate, ApiError> {
    value
        .parse::<NaiveDate>()
        .map_err(|_| ApiError::unprocessable(format!("'{value}' is not a YYYY-MM-DD date")))
}

pub async fn graphql(
    Extension(schema): Extension<AppSchema>,
    actor: Actor,
    req: GraphQLRequest,
) -> GraphQLResponse {
    schema.execute(req.into_inner().data(actor)).await.into()
}

pub async fn graphiql() -> impl IntoResponse {
    use async_graphql::http::GraphiQLSource;
    Html(GraphiQLSource::build().endpoint(GRAPHQL_PATH).finish())
}
