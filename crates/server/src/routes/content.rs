//! Public storefront handlers. Each one is generic over the content kind and
//! instantiated per route in `routes::build_router`.

use axum::extract::rejection::JsonRejection;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use common::types::ApiResponse;
use models::{ContactMessage, NewContactMessage};
use serde::{Deserialize, Serialize};
use service::content::Collection;
use service::storage::Categorized;

use crate::errors::ApiError;
use crate::routes::auth::ServerState;

#[derive(Debug, Deserialize, utoipa::IntoParams)]
#[into_params(parameter_in = Query)]
pub struct CategoryQuery {
    /// Category slug; `all` or an empty value disables the filter.
    pub category: Option<String>,
}

pub async fn list<E>(State(state): State<ServerState>) -> Json<ApiResponse<Vec<E>>>
where
    E: Collection + Serialize,
{
    Json(ApiResponse::ok(state.content.list::<E>().await))
}

pub async fn list_by_category<E>(
    State(state): State<ServerState>,
    Query(q): Query<CategoryQuery>,
) -> Json<ApiResponse<Vec<E>>>
where
    E: Collection + Categorized + Serialize,
{
    let items = state.content.list_filtered::<E>(q.category.as_deref()).await;
    Json(ApiResponse::ok(items))
}

pub async fn get_one<E>(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<E>>, ApiError>
where
    E: Collection + Serialize,
{
    let record = state.content.find::<E>(&id).await?;
    Ok(Json(ApiResponse::ok(record)))
}

#[utoipa::path(
    post, path = "/contact", tag = "contact",
    request_body = crate::openapi::ContactRequest,
    responses(
        (status = 201, description = "Message received"),
        (status = 400, description = "Validation Error")
    )
)]
pub async fn submit_contact(
    State(state): State<ServerState>,
    payload: Result<Json<NewContactMessage>, JsonRejection>,
) -> Result<(StatusCode, Json<ApiResponse<ContactMessage>>), ApiError> {
    let Json(input) = payload?;
    let created = state.content.create::<ContactMessage>(input).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::ok_with_message(created, "Message received"))))
}
