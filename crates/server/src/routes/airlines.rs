use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use models::airline;
use service::airline::domain::AirlineWithAirports;
use tracing::info;

use super::path_id;
use crate::{dto::AirlineDto, errors::JsonApiError, state::ServerState};

#[utoipa::path(
    get, path = "/airlines", tag = "airlines",
    responses((status = 200, description = "Airlines with their airports"))
)]
pub async fn list(State(state): State<ServerState>) -> Result<Json<Vec<AirlineWithAirports>>, JsonApiError> {
    let list = state.airlines.find_all().await?;
    info!(count = list.len(), "list airlines");
    Ok(Json(list))
}

#[utoipa::path(
    get, path = "/airlines/{id}", tag = "airlines",
    params(("id" = String, Path, description = "Airline ID")),
    responses(
        (status = 200, description = "OK"),
        (status = 404, description = "Not Found", body = crate::errors::ErrorBody)
    )
)]
pub async fn get(State(state): State<ServerState>, Path(id): Path<String>) -> Result<Json<AirlineWithAirports>, JsonApiError> {
    Ok(Json(state.airlines.find_one(path_id(&id)).await?))
}

#[utoipa::path(
    post, path = "/airlines", tag = "airlines",
    request_body = AirlineDto,
    responses(
        (status = 201, description = "Created"),
        (status = 400, description = "Validation Error", body = crate::errors::ErrorBody)
    )
)]
pub async fn create(
    State(state): State<ServerState>,
    payload: Result<Json<AirlineDto>, JsonRejection>,
) -> Result<(StatusCode, Json<AirlineWithAirports>), JsonApiError> {
    let Json(dto) = payload?;
    let created = state.airlines.create(dto.into_input()?).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(
    put, path = "/airlines/{id}", tag = "airlines",
    params(("id" = String, Path, description = "Airline ID")),
    request_body = AirlineDto,
    responses(
        (status = 200, description = "Updated"),
        (status = 400, description = "Validation Error", body = crate::errors::ErrorBody),
        (status = 404, description = "Not Found", body = crate::errors::ErrorBody)
    )
)]
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    payload: Result<Json<AirlineDto>, JsonRejection>,
) -> Result<Json<airline::Model>, JsonApiError> {
    let Json(dto) = payload?;
    let input = dto.into_input()?;
    Ok(Json(state.airlines.update(path_id(&id), input).await?))
}

#[utoipa::path(
    delete, path = "/airlines/{id}", tag = "airlines",
    params(("id" = String, Path, description = "Airline ID")),
    responses(
        (status = 204, description = "Deleted"),
        (status = 404, description = "Not Found", body = crate::errors::ErrorBody)
    )
)]
pub async fn delete(State(state): State<ServerState>, Path(id): Path<String>) -> Result<StatusCode, JsonApiError> {
    state.airlines.delete(path_id(&id)).await?;
    Ok(StatusCode::NO_CONTENT)
}
