use async_trait::async_trait;
use sea_orm::DatabaseConnection;
use uuid::Uuid;

use models::airline;

use super::domain::{AirlineInput, AirlineWithAirports};
use crate::errors::ServiceError;

/// Persistence for airline records and the airline side of the relation.
///
/// Every mutating call is atomic on its own.
#[async_trait]
pub trait AirlineRepository: Send + Sync {
    async fn list_airlines(&self) -> Result<Vec<AirlineWithAirports>, ServiceError>;
    async fn get_airline(&self, id: Uuid) -> Result<Option<airline::Model>, ServiceError>;
    async fn get_airline_with_airports(&self, id: Uuid) -> Result<Option<AirlineWithAirports>, ServiceError>;
    /// Assigns a fresh id; the new airline has no airports.
    async fn insert_airline(&self, input: AirlineInput) -> Result<airline::Model, ServiceError>;
    /// Overwrites every field except the id; links are left as they are.
    async fn update_airline(&self, id: Uuid, input: AirlineInput) -> Result<Option<airline::Model>, ServiceError>;
    /// Removes the airline and its relation rows; returns whether it existed.
    async fn delete_airline(&self, id: Uuid) -> Result<bool, ServiceError>;

    /// Appends one relation row, even if the pair is already linked.
    async fn add_airport(&self, airline_id: Uuid, airport_id: Uuid) -> Result<(), ServiceError>;
    /// Replaces every relation row of the airline with `airport_ids`, in order.
    async fn replace_airports(&self, airline_id: Uuid, airport_ids: &[Uuid]) -> Result<(), ServiceError>;
    /// Removes every relation row for the pair; returns the number removed.
    async fn remove_airport(&self, airline_id: Uuid, airport_id: Uuid) -> Result<u64, ServiceError>;
}

/// SeaORM-backed repository implementation.
pub struct SeaOrmAirlineRepository {
    pub db: DatabaseConnection,
}

#[async_trait]
impl AirlineRepository for SeaOrmAirlineRepository {
    async fn list_airlines(&self) -> Result<Vec<AirlineWithAirports>, ServiceError> {
        crate::db::airline_store::list_airlines(&self.db).await
    }

    async fn get_airline(&self, id: Uuid) -> Result<Option<airline::Model>, ServiceError> {
        crate::db::airline_store::get_airline(&self.db, id).await
    }

    async fn get_airline_with_airports(&self, id: Uuid) -> Result<Option<AirlineWithAirports>, ServiceError> {
        crate::db::airline_store::get_airline_with_airports(&self.db, id).await
    }

    async fn insert_airline(&self, input: AirlineInput) -> Result<airline::Model, ServiceError> {
        crate::db::airline_store::insert_airline(&self.db, input).await
    }

    async fn update_airline(&self, id: Uuid, input: AirlineInput) -> Result<Option<airline::Model>, ServiceError> {
        crate::db::airline_store::update_airline(&self.db, id, input).await
    }

    async fn delete_airline(&self, id: Uuid) -> Result<bool, ServiceError> {
        crate::db::airline_store::delete_airline(&self.db, id).await
    }

    async fn add_airport(&self, airline_id: Uuid, airport_id: Uuid) -> Result<(), ServiceError> {
        crate::db::airline_store::add_airport_link(&self.db, airline_id, airport_id).await
    }

    async fn replace_airports(&self, airline_id: Uuid, airport_ids: &[Uuid]) -> Result<(), ServiceError> {
        crate::db::airline_store::replace_airport_links(&self.db, airline_id, airport_ids).await
    }

    async fn remove_airport(&self, airline_id: Uuid, airport_id: Uuid) -> Result<u64, ServiceError> {
        crate::db::airline_store::remove_airport_links(&self.db, airline_id, airport_id).await
    }
}
