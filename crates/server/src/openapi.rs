use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::airlines::list,
        crate::routes::airlines::get,
        crate::routes::airlines::create,
        crate::routes::airlines::update,
        crate::routes::airlines::delete,
        crate::routes::airports::list,
        crate::routes::airports::get,
        crate::routes::airports::create,
        crate::routes::airports::update,
        crate::routes::airports::delete,
        crate::routes::airline_airports::add,
        crate::routes::airline_airports::get,
        crate::routes::airline_airports::list,
        crate::routes::airline_airports::replace,
        crate::routes::airline_airports::remove,
    ),
    components(
        schemas(
            HealthResponse,
            crate::dto::AirlineDto,
            crate::dto::AirportDto,
            crate::dto::AirportRefDto,
            crate::errors::ErrorBody,
        )
    ),
    tags(
        (name = "health"),
        (name = "airlines"),
        (name = "airports"),
        (name = "associations")
    )
)]
pub struct ApiDoc;
