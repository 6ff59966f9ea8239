use std::sync::Arc;

use tracing::{info, instrument};
use uuid::Uuid;

use models::airport;

use super::domain::{AirportInput, AirportWithAirlines};
use super::repository::AirportRepository;
use crate::errors::ServiceError;

/// CRUD over airport records with the three-character code rule.
pub struct AirportService<R: AirportRepository + ?Sized> {
    repo: Arc<R>,
}

impl<R: AirportRepository + ?Sized> AirportService<R> {
    pub fn new(repo: Arc<R>) -> Self { Self { repo } }

    pub async fn find_all(&self) -> Result<Vec<AirportWithAirlines>, ServiceError> {
        self.repo.list_airports().await
    }

    #[instrument(skip(self), fields(airport_id = %id))]
    pub async fn find_one(&self, id: Uuid) -> Result<AirportWithAirlines, ServiceError> {
        self.repo
            .get_airport_with_airlines(id)
            .await?
            .ok_or_else(ServiceError::airport_not_found)
    }

    #[instrument(skip(self, input), fields(code = %input.code))]
    pub async fn create(&self, input: AirportInput) -> Result<airport::Model, ServiceError> {
        airport::validate_code(&input.code)?;
        let created = self.repo.insert_airport(input).await?;
        info!(airport_id = %created.id, code = %created.code, "airport_created");
        Ok(created)
    }

    /// The code rule is checked before existence, so a bad code wins even
    /// for an unknown id.
    #[instrument(skip(self, input), fields(airport_id = %id, code = %input.code))]
    pub async fn update(&self, id: Uuid, input: AirportInput) -> Result<airport::Model, ServiceError> {
        let persisted = self.repo.get_airport(id).await?;
        airport::validate_code(&input.code)?;
        if persisted.is_none() {
            return Err(ServiceError::airport_not_found());
        }
        let updated = self
            .repo
            .update_airport(id, input)
            .await?
            .ok_or_else(ServiceError::airport_not_found)?;
        info!(airport_id = %updated.id, "airport_updated");
        Ok(updated)
    }

    #[instrument(skip(self), fields(airport_id = %id))]
    pub async fn delete(&self, id: Uuid) -> Result<(), ServiceError> {
        if !self.repo.delete_airport(id).await? {
            return Err(ServiceError::airport_not_found());
        }
        info!(airport_id = %id, "airport_deleted");
        Ok(())
    }
}
