// Resolves the calling actor from trusted request headers. Session issuance
// happens upstream; by the time a request reaches this service the gateway
// has already stamped these headers.

use axum::{
    extract::FromRequestParts,
    http::{HeaderMap, request::Parts},
};

use crate::modules::access::core::policy::{Actor, Role};
use crate::shared::inbound::http_error::ApiError;

pub const TENANT_HEADER: &str = "x-tenant-id";
pub const USER_HEADER: &str = "x-user-id";
pub const ROLE_HEADER: &str = "x-user-role";

pub fn actor_from_headers(headers: &HeaderMap) -> Result<Actor, ApiError> {
    let tenant_id = required_header(headers, TENANT_HEADER)?;
    let user_id = required_header(headers, USER_HEADER)?;
    let role = required_header(headers, ROLE_HEADER)?
        .parse::<Role>()
        .map_err(|_| ApiError::unauthorized("Not authenticated"))?;
    Ok(Actor::new(tenant_id, user_id, role))
}

fn required_header(headers: &HeaderMap, name: &str) -> Result<String, ApiError> {
    headers
        .get(name)
        .and_then(|value| value.to_str().ok())
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_string)
        .ok_or_else(|| ApiError::unauthorized("Not authenticated"))
}

impl<S> FromRequestParts<S> for Actor
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        actor_from_headers(&parts.headers)
    }
}
