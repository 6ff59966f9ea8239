use std::sync::Arc;

use chrono::Utc;
use tracing::{info, instrument};
use uuid::Uuid;

use models::airline;

use super::domain::{AirlineInput, AirlineWithAirports};
use super::repository::AirlineRepository;
use crate::errors::ServiceError;

/// CRUD over airline records.
///
/// Only `update` enforces the past foundation date; `create` stores the date
/// as given.
pub struct AirlineService<R: AirlineRepository + ?Sized> {
    repo: Arc<R>,
}

impl<R: AirlineRepository + ?Sized> AirlineService<R> {
    pub fn new(repo: Arc<R>) -> Self { Self { repo } }

    pub async fn find_all(&self) -> Result<Vec<AirlineWithAirports>, ServiceError> {
        self.repo.list_airlines().await
    }

    #[instrument(skip(self), fields(airline_id = %id))]
    pub async fn find_one(&self, id: Uuid) -> Result<AirlineWithAirports, ServiceError> {
        self.repo
            .get_airline_with_airports(id)
            .await?
            .ok_or_else(ServiceError::airline_not_found)
    }

    #[instrument(skip(self, input), fields(name = %input.name))]
    pub async fn create(&self, input: AirlineInput) -> Result<AirlineWithAirports, ServiceError> {
        let created = self.repo.insert_airline(input).await?;
        info!(airline_id = %created.id, "airline_created");
        Ok(AirlineWithAirports { airline: created, airports: Vec::new() })
    }

    #[instrument(skip(self, input), fields(airline_id = %id))]
    pub async fn update(&self, id: Uuid, input: AirlineInput) -> Result<airline::Model, ServiceError> {
        airline::validate_foundation_date(input.foundation_date, Utc::now())?;
        if self.repo.get_airline(id).await?.is_none() {
            return Err(ServiceError::airline_not_found());
        }
        let updated = self
            .repo
            .update_airline(id, input)
            .await?
            .ok_or_else(ServiceError::airline_not_found)?;
        info!(airline_id = %updated.id, "airline_updated");
        Ok(updated)
    }

    #[instrument(skip(self), fields(airline_id = %id))]
    pub async fn delete(&self, id: Uuid) -> Result<(), ServiceError> {
        if !self.repo.delete_airline(id).await? {
            return Err(ServiceError::airline_not_found());
        }
        info!(airline_id = %id, "airline_deleted");
        Ok(())
    }
}
