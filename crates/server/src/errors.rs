use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use common::types::ApiResponse;
use models::FieldViolation;
use serde::Serialize;
use service::auth::errors::AuthError;
use service::errors::ServiceError;
use thiserror::Error;
use tracing::error;

/// Handler error, rendered as the failure form of the response envelope.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("validation error")]
    Validation(Vec<FieldViolation>),
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    Unauthorized(String),
    #[error("internal error: {0}")]
    Internal(String),
}

/// The failure envelope plus per-field violations when there are any.
#[derive(Serialize)]
struct ErrorBody {
    #[serde(flatten)]
    envelope: ApiResponse<()>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    errors: Vec<FieldViolation>,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let (message, errors) = match self {
            ApiError::Validation(errors) => ("Validation Error".to_string(), errors),
            ApiError::NotFound(msg) | ApiError::Unauthorized(msg) => (msg, Vec::new()),
            ApiError::Internal(detail) => {
                error!(error = %detail, "request failed");
                ("Internal Server Error".to_string(), Vec::new())
            }
        };
        let body = ErrorBody { envelope: ApiResponse::failure(message), errors };
        (status, Json(body)).into_response()
    }
}

impl From<ServiceError> for ApiError {
    fn from(e: ServiceError) -> Self {
        match e {
            ServiceError::Validation(v) => ApiError::Validation(v),
            ServiceError::NotFound(msg) => ApiError::NotFound(msg),
        }
    }
}

impl From<AuthError> for ApiError {
    fn from(e: AuthError) -> Self {
        match e {
            AuthError::MissingToken | AuthError::Unauthorized | AuthError::TokenError(_) => {
                ApiError::Unauthorized(e.to_string())
            }
            AuthError::Validation(_) | AuthError::HashError(_) => ApiError::Internal(e.to_string()),
        }
    }
}

/// Malformed JSON, wrong types and categories outside the closed set all
/// land here, before any store is touched.
impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::Validation(vec![FieldViolation::new("body", rejection.body_text())])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    async fn render(err: ApiError) -> (StatusCode, serde_json::Value) {
        let resp = err.into_response();
        let status = resp.status();
        let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn validation_lists_fields() {
        let (status, body) = render(ApiError::Validation(vec![FieldViolation::new("name", "too short")])).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["success"], false);
        assert!(body["data"].is_null());
        assert!(body.as_object().unwrap().contains_key("data"));
        assert_eq!(body["message"], "Validation Error");
        assert_eq!(body["errors"][0]["field"], "name");
    }

    #[tokio::test]
    async fn internal_hides_detail() {
        let (status, body) = render(ApiError::Internal("lock poisoned".into())).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["message"], "Internal Server Error");
        assert!(body.get("errors").is_none());
    }

    #[test]
    fn service_errors_map_to_statuses() {
        assert_eq!(ApiError::from(ServiceError::not_found("product", "x")).status(), StatusCode::NOT_FOUND);
        assert_eq!(ApiError::from(AuthError::MissingToken).status(), StatusCode::UNAUTHORIZED);
        assert_eq!(ApiError::from(AuthError::HashError("x".into())).status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
