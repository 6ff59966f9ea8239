use std::collections::HashMap;

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
    TransactionTrait,
};
use uuid::Uuid;

use models::{airline, airline_airport, airport};
use crate::airline::domain::{AirlineInput, AirlineWithAirports};
use crate::errors::ServiceError;

/// List airlines, each with its airports.
pub async fn list_airlines<C: ConnectionTrait>(db: &C) -> Result<Vec<AirlineWithAirports>, ServiceError> {
    let airlines = airline::Entity::find().all(db).await?;
    let links = airline_airport::Entity::find()
        .order_by_asc(airline_airport::Column::CreatedAt)
        .find_also_related(airport::Entity)
        .all(db)
        .await?;

    let mut by_airline: HashMap<Uuid, Vec<airport::Model>> = HashMap::new();
    for (link, related) in links {
        if let Some(a) = related {
            by_airline.entry(link.airline_id).or_default().push(a);
        }
    }

    Ok(airlines
        .into_iter()
        .map(|airline| {
            let airports = by_airline.remove(&airline.id).unwrap_or_default();
            AirlineWithAirports { airline, airports }
        })
        .collect())
}

/// Get an airline by id.
pub async fn get_airline<C: ConnectionTrait>(db: &C, id: Uuid) -> Result<Option<airline::Model>, ServiceError> {
    Ok(airline::Entity::find_by_id(id).one(db).await?)
}

/// Get an airline with its airports, one entry per relation row.
pub async fn get_airline_with_airports<C: ConnectionTrait>(db: &C, id: Uuid) -> Result<Option<AirlineWithAirports>, ServiceError> {
    let Some(airline) = get_airline(db, id).await? else { return Ok(None); };
    let airports = airports_of(db, id).await?;
    Ok(Some(AirlineWithAirports { airline, airports }))
}

async fn airports_of<C: ConnectionTrait>(db: &C, airline_id: Uuid) -> Result<Vec<airport::Model>, ServiceError> {
    let rows = airline_airport::Entity::find()
        .filter(airline_airport::Column::AirlineId.eq(airline_id))
        .order_by_asc(airline_airport::Column::CreatedAt)
        .find_also_related(airport::Entity)
        .all(db)
        .await?;
    Ok(rows.into_iter().filter_map(|(_, a)| a).collect())
}

/// Insert an airline under a fresh id.
pub async fn insert_airline<C: ConnectionTrait>(db: &C, input: AirlineInput) -> Result<airline::Model, ServiceError> {
    let am = airline::ActiveModel {
        id: Set(Uuid::new_v4()),
        name: Set(input.name),
        description: Set(input.description),
        foundation_date: Set(input.foundation_date),
        web_page: Set(input.web_page),
    };
    Ok(am.insert(db).await?)
}

/// Overwrite an airline's fields; `None` if it does not exist.
pub async fn update_airline<C: ConnectionTrait>(db: &C, id: Uuid, input: AirlineInput) -> Result<Option<airline::Model>, ServiceError> {
    let Some(existing) = get_airline(db, id).await? else { return Ok(None); };
    let mut am: airline::ActiveModel = existing.into();
    am.name = Set(input.name);
    am.description = Set(input.description);
    am.foundation_date = Set(input.foundation_date);
    am.web_page = Set(input.web_page);
    Ok(Some(am.update(db).await?))
}

/// Delete an airline; relation rows go with it through the FK cascade.
pub async fn delete_airline<C: ConnectionTrait>(db: &C, id: Uuid) -> Result<bool, ServiceError> {
    let res = airline::Entity::delete_by_id(id).exec(db).await?;
    Ok(res.rows_affected > 0)
}

/// Append one relation row.
pub async fn add_airport_link<C: ConnectionTrait>(db: &C, airline_id: Uuid, airport_id: Uuid) -> Result<(), ServiceError> {
    let am = airline_airport::ActiveModel {
        id: Set(Uuid::new_v4()),
        airline_id: Set(airline_id),
        airport_id: Set(airport_id),
        created_at: Set(Utc::now().into()),
    };
    am.insert(db).await?;
    Ok(())
}

/// Swap the airline's relation rows for `airport_ids` in a single transaction.
pub async fn replace_airport_links(db: &DatabaseConnection, airline_id: Uuid, airport_ids: &[Uuid]) -> Result<(), ServiceError> {
    let txn = db.begin().await?;
    airline_airport::Entity::delete_many()
        .filter(airline_airport::Column::AirlineId.eq(airline_id))
        .exec(&txn)
        .await?;

    if !airport_ids.is_empty() {
        let now = Utc::now();
        // spaced timestamps keep the input order when read back
        let rows = airport_ids.iter().enumerate().map(|(i, airport_id)| airline_airport::ActiveModel {
            id: Set(Uuid::new_v4()),
            airline_id: Set(airline_id),
            airport_id: Set(*airport_id),
            created_at: Set((now + chrono::Duration::microseconds(i as i64)).into()),
        });
        airline_airport::Entity::insert_many(rows).exec(&txn).await?;
    }

    txn.commit().await?;
    Ok(())
}

/// Remove every relation row for the pair.
pub async fn remove_airport_links<C: ConnectionTrait>(db: &C, airline_id: Uuid, airport_id: Uuid) -> Result<u64, ServiceError> {
    let res = airline_airport::Entity::delete_many()
        .filter(airline_airport::Column::AirlineId.eq(airline_id))
        .filter(airline_airport::Column::AirportId.eq(airport_id))
        .exec(db)
        .await?;
    Ok(res.rows_affected)
}
