use std::collections::HashMap;

use sea_orm::{ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder, Set};
use uuid::Uuid;

use models::{airline, airline_airport, airport};
use crate::airport::domain::{AirportInput, AirportWithAirlines};
use crate::errors::ServiceError;

/// List airports, each with the airlines linked to it.
pub async fn list_airports<C: ConnectionTrait>(db: &C) -> Result<Vec<AirportWithAirlines>, ServiceError> {
    let airports = airport::Entity::find().all(db).await?;
    let links = airline_airport::Entity::find()
        .order_by_asc(airline_airport::Column::CreatedAt)
        .find_also_related(airline::Entity)
        .all(db)
        .await?;

    let mut by_airport: HashMap<Uuid, Vec<airline::Model>> = HashMap::new();
    for (link, related) in links {
        if let Some(a) = related {
            by_airport.entry(link.airport_id).or_default().push(a);
        }
    }

    Ok(airports
        .into_iter()
        .map(|airport| {
            let airlines = by_airport.remove(&airport.id).unwrap_or_default();
            AirportWithAirlines { airport, airlines }
        })
        .collect())
}

/// Get an airport by id.
pub async fn get_airport<C: ConnectionTrait>(db: &C, id: Uuid) -> Result<Option<airport::Model>, ServiceError> {
    Ok(airport::Entity::find_by_id(id).one(db).await?)
}

/// Get an airport with the airlines linked to it.
pub async fn get_airport_with_airlines<C: ConnectionTrait>(db: &C, id: Uuid) -> Result<Option<AirportWithAirlines>, ServiceError> {
    let Some(airport) = get_airport(db, id).await? else { return Ok(None); };
    let airlines = airline_airport::Entity::find()
        .filter(airline_airport::Column::AirportId.eq(id))
        .order_by_asc(airline_airport::Column::CreatedAt)
        .find_also_related(airline::Entity)
        .all(db)
        .await?
        .into_iter()
        .filter_map(|(_, a)| a)
        .collect();
    Ok(Some(AirportWithAirlines { airport, airlines }))
}

/// Insert an airport under a fresh id.
pub async fn insert_airport<C: ConnectionTrait>(db: &C, input: AirportInput) -> Result<airport::Model, ServiceError> {
    let am = airport::ActiveModel {
        id: Set(Uuid::new_v4()),
        name: Set(input.name),
        code: Set(input.code),
        country: Set(input.country),
        city: Set(input.city),
    };
    Ok(am.insert(db).await?)
}

/// Overwrite an airport's fields; `None` if it does not exist.
pub async fn update_airport<C: ConnectionTrait>(db: &C, id: Uuid, input: AirportInput) -> Result<Option<airport::Model>, ServiceError> {
    let Some(existing) = get_airport(db, id).await? else { return Ok(None); };
    let mut am: airport::ActiveModel = existing.into();
    am.name = Set(input.name);
    am.code = Set(input.code);
    am.country = Set(input.country);
    am.city = Set(input.city);
    Ok(Some(am.update(db).await?))
}

/// Delete an airport; relation rows go with it through the FK cascade.
pub async fn delete_airport<C: ConnectionTrait>(db: &C, id: Uuid) -> Result<bool, ServiceError> {
    let res = airport::Entity::delete_by_id(id).exec(db).await?;
    Ok(res.rows_affected > 0)
}
