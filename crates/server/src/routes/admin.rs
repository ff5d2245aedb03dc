//! Admin CRUD handlers, mounted behind the bearer token middleware.

use axum::extract::rejection::JsonRejection;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use common::types::ApiResponse;
use models::Validate;
use serde::{de::DeserializeOwned, Serialize};
use service::content::Collection;

use crate::errors::ApiError;
use crate::routes::auth::ServerState;

pub async fn create<E>(
    State(state): State<ServerState>,
    payload: Result<Json<E::Input>, JsonRejection>,
) -> Result<(StatusCode, Json<ApiResponse<E>>), ApiError>
where
    E: Collection + Serialize,
    E::Input: DeserializeOwned + Validate + 'static,
{
    let Json(input) = payload?;
    let created = state.content.create::<E>(input).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::ok_with_message(created, format!("{} created", E::KIND)))))
}

pub async fn replace<E>(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    payload: Result<Json<E::Input>, JsonRejection>,
) -> Result<Json<ApiResponse<E>>, ApiError>
where
    E: Collection + Serialize,
    E::Input: DeserializeOwned + Validate + 'static,
{
    let Json(input) = payload?;
    let updated = state.content.replace::<E>(&id, input).await?;
    Ok(Json(ApiResponse::ok_with_message(updated, format!("{} updated", E::KIND))))
}

pub async fn remove<E>(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<()>>, ApiError>
where
    E: Collection,
{
    state.content.remove::<E>(&id).await?;
    Ok(Json(ApiResponse::done(format!("{} deleted", E::KIND))))
}
