use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::{
    extract::{Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::Response,
    Json,
};
use common::types::ApiResponse;
use service::auth::{
    domain::{IssuedToken, LoginInput},
    errors::AuthError,
    AdminAuth,
};
use service::content::ContentService;

use crate::errors::ApiError;

/// Shared router state: the content operations and the admin authenticator.
#[derive(Clone)]
pub struct ServerState {
    pub content: ContentService,
    pub auth: Arc<AdminAuth>,
}

#[utoipa::path(
    post, path = "/auth/login", tag = "auth",
    request_body = crate::openapi::LoginRequest,
    responses((status = 200, description = "Logged In"), (status = 401, description = "Unauthorized"))
)]
pub async fn login(
    State(state): State<ServerState>,
    payload: Result<Json<LoginInput>, JsonRejection>,
) -> Result<Json<ApiResponse<IssuedToken>>, ApiError> {
    let Json(input) = payload?;
    let issued = state.auth.login(input)?;
    Ok(Json(ApiResponse::ok_with_message(issued, "Logged in")))
}

/// Middleware for admin routes: require `Authorization: Bearer <token>`
/// carrying a valid, unexpired admin token.
pub async fn require_bearer_token(
    State(state): State<ServerState>,
    req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let path = req.uri().path().to_string();
    let header = req
        .headers()
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .map(str::trim);

    let token = match header {
        None => {
            tracing::warn!(path = %path, "missing Authorization header");
            return Err(AuthError::MissingToken.into());
        }
        Some(h) => match h.strip_prefix("Bearer ") {
            Some(t) => t.trim().to_string(),
            None => {
                tracing::warn!(path = %path, "invalid Authorization format (expect Bearer)");
                return Err(AuthError::Unauthorized.into());
            }
        },
    };

    if let Err(e) = state.auth.verify(&token) {
        tracing::warn!(path = %path, err = %e, "token validation failed");
        return Err(e.into());
    }
    Ok(next.run(req).await)
}
