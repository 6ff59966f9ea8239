use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use models::airport;
use service::airline::domain::AirlineWithAirports;

use super::path_id;
use crate::{dto::AirportRefDto, errors::JsonApiError, state::ServerState};

#[utoipa::path(
    post, path = "/airlines/{id}/airports/{airport_id}", tag = "associations",
    params(
        ("id" = String, Path, description = "Airline ID"),
        ("airport_id" = String, Path, description = "Airport ID")
    ),
    responses(
        (status = 201, description = "Airline with its airports"),
        (status = 404, description = "Not Found", body = crate::errors::ErrorBody)
    )
)]
pub async fn add(
    State(state): State<ServerState>,
    Path((airline_id, airport_id)): Path<(String, String)>,
) -> Result<(StatusCode, Json<AirlineWithAirports>), JsonApiError> {
    let linked = state
        .associations
        .add_airport_to_airline(path_id(&airline_id), path_id(&airport_id))
        .await?;
    Ok((StatusCode::CREATED, Json(linked)))
}

#[utoipa::path(
    get, path = "/airlines/{id}/airports/{airport_id}", tag = "associations",
    params(
        ("id" = String, Path, description = "Airline ID"),
        ("airport_id" = String, Path, description = "Airport ID")
    ),
    responses(
        (status = 200, description = "OK"),
        (status = 404, description = "Not Found", body = crate::errors::ErrorBody),
        (status = 412, description = "Not Associated", body = crate::errors::ErrorBody)
    )
)]
pub async fn get(
    State(state): State<ServerState>,
    Path((airline_id, airport_id)): Path<(String, String)>,
) -> Result<Json<airport::Model>, JsonApiError> {
    let found = state
        .associations
        .find_airport_by_airline_id_airport_id(path_id(&airline_id), path_id(&airport_id))
        .await?;
    Ok(Json(found))
}

#[utoipa::path(
    get, path = "/airlines/{id}/airports", tag = "associations",
    params(("id" = String, Path, description = "Airline ID")),
    responses(
        (status = 200, description = "OK"),
        (status = 404, description = "Not Found", body = crate::errors::ErrorBody)
    )
)]
pub async fn list(State(state): State<ServerState>, Path(airline_id): Path<String>) -> Result<Json<Vec<airport::Model>>, JsonApiError> {
    Ok(Json(state.associations.find_airports_by_airline_id(path_id(&airline_id)).await?))
}

#[utoipa::path(
    put, path = "/airlines/{id}/airports", tag = "associations",
    params(("id" = String, Path, description = "Airline ID")),
    request_body = Vec<AirportRefDto>,
    responses(
        (status = 200, description = "Airline with its new airports"),
        (status = 404, description = "Not Found", body = crate::errors::ErrorBody)
    )
)]
pub async fn replace(
    State(state): State<ServerState>,
    Path(airline_id): Path<String>,
    payload: Result<Json<Vec<AirportRefDto>>, JsonRejection>,
) -> Result<Json<AirlineWithAirports>, JsonApiError> {
    let Json(refs) = payload?;
    let ids: Vec<_> = refs.iter().map(|r| path_id(&r.id)).collect();
    Ok(Json(state.associations.update_airports_for_airline(path_id(&airline_id), &ids).await?))
}

#[utoipa::path(
    delete, path = "/airlines/{id}/airports/{airport_id}", tag = "associations",
    params(
        ("id" = String, Path, description = "Airline ID"),
        ("airport_id" = String, Path, description = "Airport ID")
    ),
    responses(
        (status = 204, description = "Unlinked"),
        (status = 404, description = "Not Found", body = crate::errors::ErrorBody),
        (status = 412, description = "Not Associated", body = crate::errors::ErrorBody)
    )
)]
pub async fn remove(
    State(state): State<ServerState>,
    Path((airline_id, airport_id)): Path<(String, String)>,
) -> Result<StatusCode, JsonApiError> {
    state
        .associations
        .delete_airport_from_airline(path_id(&airline_id), path_id(&airport_id))
        .await?;
    Ok(StatusCode::NO_CONTENT)
}
