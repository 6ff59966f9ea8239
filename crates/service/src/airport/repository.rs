use async_trait::async_trait;
use sea_orm::DatabaseConnection;
use uuid::Uuid;

use models::airport;

use super::domain::{AirportInput, AirportWithAirlines};
use crate::errors::ServiceError;

/// Persistence for airport records.
#[async_trait]
pub trait AirportRepository: Send + Sync {
    async fn list_airports(&self) -> Result<Vec<AirportWithAirlines>, ServiceError>;
    async fn get_airport(&self, id: Uuid) -> Result<Option<airport::Model>, ServiceError>;
    async fn get_airport_with_airlines(&self, id: Uuid) -> Result<Option<AirportWithAirlines>, ServiceError>;
    /// Assigns a fresh id; the new airport has no airlines.
    async fn insert_airport(&self, input: AirportInput) -> Result<airport::Model, ServiceError>;
    /// Overwrites every field except the id; links are left as they are.
    async fn update_airport(&self, id: Uuid, input: AirportInput) -> Result<Option<airport::Model>, ServiceError>;
    /// Removes the airport and its relation rows; returns whether it existed.
    async fn delete_airport(&self, id: Uuid) -> Result<bool, ServiceError>;
}

/// SeaORM-backed repository implementation.
pub struct SeaOrmAirportRepository {
    pub db: DatabaseConnection,
}

#[async_trait]
impl AirportRepository for SeaOrmAirportRepository {
    async fn list_airports(&self) -> Result<Vec<AirportWithAirlines>, ServiceError> {
        crate::db::airport_store::list_airports(&self.db).await
    }

    async fn get_airport(&self, id: Uuid) -> Result<Option<airport::Model>, ServiceError> {
        crate::db::airport_store::get_airport(&self.db, id).await
    }

    async fn get_airport_with_airlines(&self, id: Uuid) -> Result<Option<AirportWithAirlines>, ServiceError> {
        crate::db::airport_store::get_airport_with_airlines(&self.db, id).await
    }

    async fn insert_airport(&self, input: AirportInput) -> Result<airport::Model, ServiceError> {
        crate::db::airport_store::insert_airport(&self.db, input).await
    }

    async fn update_airport(&self, id: Uuid, input: AirportInput) -> Result<Option<airport::Model>, ServiceError> {
        crate::db::airport_store::update_airport(&self.db, id, input).await
    }

    async fn delete_airport(&self, id: Uuid) -> Result<bool, ServiceError> {
        crate::db::airport_store::delete_airport(&self.db, id).await
    }
}
