use async_graphql::ErrorExtensions;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    existing_time_entry_id: Option<String>,
}

/// JSON error response shared by every HTTP inbound adapter.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    message: String,
    existing_time_entry_id: Option<String>,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
            existing_time_entry_id: None,
        }
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::new(StatusCode::UNAUTHORIZED, message)
    }

    /// Authorization failures never say which rule rejected the caller.
    pub fn forbidden() -> Self {
        Self::new(StatusCode::FORBIDDEN, "forbidden")
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, message)
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::new(StatusCode::CONFLICT, message)
    }

    pub fn collision(existing_time_entry_id: impl Into<String>) -> Self {
        Self {
            existing_time_entry_id: Some(existing_time_entry_id.into()),
            ..Self::conflict("a time entry already exists for this project and date")
        }
    }

    pub fn unprocessable(message: impl Into<String>) -> Self {
        Self::new(StatusCode::UNPROCESSABLE_ENTITY, message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if self.status.is_server_error() {
            tracing::error!(status = %self.status, message = %self.message, "request failed");
        }
        let body = ErrorBody {
            error: self.message,
            existing_time_entry_id: self.existing_time_entry_id,
        };
        (self.status, Json(body)).into_response()
    }
}

/// GraphQL resolvers reuse the HTTP error mapping; the status travels as an
/// error extension.
impl From<ApiError> for async_graphql::Error {
    fn from(error: ApiError) -> Self {
        let status = i32::from(error.status.as_u16());
        let existing_time_entry_id = error.existing_time_entry_id;
        async_graphql::Error::new(error.message).extend_with(|_, extensions| {
            extensions.set("status", status);
            if let Some(id) = &existing_time_entry_id {
                extensions.set("existing_time_entry_id", id.clone());
            }
        })
    }
}

#[cfg(test)]
mod http_error_tests {
    use super::*;
    use http_body_util::BodyExt;
    use rstest::rstest;

    #[rstest]
    #[tokio::test]
    async fn it_should_render_the_collision_with_the_existing_id() {
        let response = ApiError::collision("te-1").into_response();
        assert_eq!(response.status(), StatusCode::CONFLICT);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(json["existing_time_entry_id"], "te-1");
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_keep_forbidden_generic() {
        let response = ApiError::forbidden().into_response();
        assert_eq!(response.status(), StatusCode::FORBIDDEN);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(json, serde_json::json!({ "error": "forbidden" }));
    }

    #[rstest]
    fn it_should_carry_the_status_into_graphql_errors() {
        let error = async_graphql::Error::from(ApiError::not_found("time entry not found"));
        assert_eq!(error.message, "time entry not found");
        let extensions = error.extensions.expect("extensions set");
        assert_eq!(
            serde_json::to_value(&extensions).unwrap(),
            serde_json::json!({ "status": 404 })
        );
    }
}
