use axum::{
    routing::get,
    Json, Router,
};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;
use uuid::Uuid;

use common::types::Health;

use crate::openapi::ApiDoc;
use crate::state::ServerState;

pub mod airline_airports;
pub mod airlines;
pub mod airports;

#[utoipa::path(
    get, path = "/health", tag = "health",
    responses((status = 200, description = "OK", body = crate::openapi::HealthResponse))
)]
pub async fn health() -> Json<Health> {
    Json(Health::ok())
}

/// Ids that are not UUIDs become the nil id, which the stores never assign,
/// so the services report them as not found in their usual check order.
pub(crate) fn path_id(raw: &str) -> Uuid {
    Uuid::parse_str(raw.trim()).unwrap_or(Uuid::nil())
}

/// Build the full application router
pub fn build_router(state: ServerState, cors: CorsLayer) -> Router {
    let airlines = Router::new()
        .route("/airlines", get(airlines::list).post(airlines::create))
        .route(
            "/airlines/:id",
            get(airlines::get).put(airlines::update).delete(airlines::delete),
        );

    let airports = Router::new()
        .route("/airports", get(airports::list).post(airports::create))
        .route(
            "/airports/:id",
            get(airports::get).put(airports::update).delete(airports::delete),
        );

    // the airline segment must be `:id` here too, or matchit rejects the overlap
    let associations = Router::new()
        .route(
            "/airlines/:id/airports",
            get(airline_airports::list).put(airline_airports::replace),
        )
        .route(
            "/airlines/:id/airports/:airport_id",
            get(airline_airports::get)
                .post(airline_airports::add)
                .delete(airline_airports::remove),
        );

    Router::new()
        .route("/health", get(health))
        .merge(airlines)
        .merge(airports)
        .merge(associations)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .with_state(state)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO).include_headers(false))
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
