use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use models::airport;
use service::airport::domain::AirportWithAirlines;
use tracing::info;

use super::path_id;
use crate::{dto::AirportDto, errors::JsonApiError, state::ServerState};

#[utoipa::path(
    get, path = "/airports", tag = "airports",
    responses((status = 200, description = "Airports with their airlines"))
)]
pub async fn list(State(state): State<ServerState>) -> Result<Json<Vec<AirportWithAirlines>>, JsonApiError> {
    let list = state.airports.find_all().await?;
    info!(count = list.len(), "list airports");
    Ok(Json(list))
}

#[utoipa::path(
    get, path = "/airports/{id}", tag = "airports",
    params(("id" = String, Path, description = "Airport ID")),
    responses(
        (status = 200, description = "OK"),
        (status = 404, description = "Not Found", body = crate::errors::ErrorBody)
    )
)]
pub async fn get(State(state): State<ServerState>, Path(id): Path<String>) -> Result<Json<AirportWithAirlines>, JsonApiError> {
    Ok(Json(state.airports.find_one(path_id(&id)).await?))
}

#[utoipa::path(
    post, path = "/airports", tag = "airports",
    request_body = AirportDto,
    responses(
        (status = 201, description = "Created"),
        (status = 400, description = "Validation Error", body = crate::errors::ErrorBody)
    )
)]
pub async fn create(
    State(state): State<ServerState>,
    payload: Result<Json<AirportDto>, JsonRejection>,
) -> Result<(StatusCode, Json<airport::Model>), JsonApiError> {
    let Json(dto) = payload?;
    let created = state.airports.create(dto.into_input()?).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(
    put, path = "/airports/{id}", tag = "airports",
    params(("id" = String, Path, description = "Airport ID")),
    request_body = AirportDto,
    responses(
        (status = 200, description = "Updated"),
        (status = 400, description = "Validation Error", body = crate::errors::ErrorBody),
        (status = 404, description = "Not Found", body = crate::errors::ErrorBody)
    )
)]
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    payload: Result<Json<AirportDto>, JsonRejection>,
) -> Result<Json<airport::Model>, JsonApiError> {
    let Json(dto) = payload?;
    let input = dto.into_input()?;
    Ok(Json(state.airports.update(path_id(&id), input).await?))
}

#[utoipa::path(
    delete, path = "/airports/{id}", tag = "airports",
    params(("id" = String, Path, description = "Airport ID")),
    responses(
        (status = 204, description = "Deleted"),
        (status = 404, description = "Not Found", body = crate::errors::ErrorBody)
    )
)]
pub async fn delete(State(state): State<ServerState>, Path(id): Path<String>) -> Result<StatusCode, JsonApiError> {
    state.airports.delete(path_id(&id)).await?;
    Ok(StatusCode::NO_CONTENT)
}
