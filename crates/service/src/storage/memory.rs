use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use models::{airline, airline_airport, airport};

use crate::airline::domain::{AirlineInput, AirlineWithAirports};
use crate::airline::repository::AirlineRepository;
use crate::airport::domain::{AirportInput, AirportWithAirlines};
use crate::airport::repository::AirportRepository;
use crate::errors::ServiceError;

#[derive(Default)]
struct Tables {
    airlines: Vec<airline::Model>,
    airports: Vec<airport::Model>,
    links: Vec<airline_airport::Model>,
}

impl Tables {
    fn airline(&self, id: Uuid) -> Option<&airline::Model> { self.airlines.iter().find(|a| a.id == id) }

    fn airport(&self, id: Uuid) -> Option<&airport::Model> { self.airports.iter().find(|a| a.id == id) }

    fn airports_of(&self, airline_id: Uuid) -> Vec<airport::Model> {
        self.links
            .iter()
            .filter(|l| l.airline_id == airline_id)
            .filter_map(|l| self.airport(l.airport_id).cloned())
            .collect()
    }

    fn airlines_of(&self, airport_id: Uuid) -> Vec<airline::Model> {
        self.links
            .iter()
            .filter(|l| l.airport_id == airport_id)
            .filter_map(|l| self.airline(l.airline_id).cloned())
            .collect()
    }

    fn link(airline_id: Uuid, airport_id: Uuid) -> airline_airport::Model {
        airline_airport::Model { id: Uuid::new_v4(), airline_id, airport_id, created_at: Utc::now().into() }
    }
}

/// In-process store for airlines, airports and the relation between them.
///
/// Clones share the same tables. Each trait call takes the lock once, so
/// every mutation is atomic.
#[derive(Clone, Default)]
pub struct MemoryStore {
    inner: Arc<RwLock<Tables>>,
}

impl MemoryStore {
    pub fn new() -> Self { Self::default() }

    /// Number of relation rows, duplicates included.
    pub async fn link_count(&self) -> usize { self.inner.read().await.links.len() }
}

#[async_trait]
impl AirlineRepository for MemoryStore {
    async fn list_airlines(&self) -> Result<Vec<AirlineWithAirports>, ServiceError> {
        let t = self.inner.read().await;
        Ok(t.airlines
            .iter()
            .map(|a| AirlineWithAirports { airline: a.clone(), airports: t.airports_of(a.id) })
            .collect())
    }

    async fn get_airline(&self, id: Uuid) -> Result<Option<airline::Model>, ServiceError> {
        Ok(self.inner.read().await.airline(id).cloned())
    }

    async fn get_airline_with_airports(&self, id: Uuid) -> Result<Option<AirlineWithAirports>, ServiceError> {
        let t = self.inner.read().await;
        Ok(t.airline(id).map(|a| AirlineWithAirports { airline: a.clone(), airports: t.airports_of(id) }))
    }

    async fn insert_airline(&self, input: AirlineInput) -> Result<airline::Model, ServiceError> {
        let model = airline::Model {
            id: Uuid::new_v4(),
            name: input.name,
            description: input.description,
            foundation_date: input.foundation_date,
            web_page: input.web_page,
        };
        self.inner.write().await.airlines.push(model.clone());
        Ok(model)
    }

    async fn update_airline(&self, id: Uuid, input: AirlineInput) -> Result<Option<airline::Model>, ServiceError> {
        let mut t = self.inner.write().await;
        let Some(existing) = t.airlines.iter_mut().find(|a| a.id == id) else { return Ok(None); };
        existing.name = input.name;
        existing.description = input.description;
        existing.foundation_date = input.foundation_date;
        existing.web_page = input.web_page;
        Ok(Some(existing.clone()))
    }

    async fn delete_airline(&self, id: Uuid) -> Result<bool, ServiceError> {
        let mut t = self.inner.write().await;
        let before = t.airlines.len();
        t.airlines.retain(|a| a.id != id);
        if t.airlines.len() == before { return Ok(false); }
        t.links.retain(|l| l.airline_id != id);
        Ok(true)
    }

    async fn add_airport(&self, airline_id: Uuid, airport_id: Uuid) -> Result<(), ServiceError> {
        let mut t = self.inner.write().await;
        // mirror the FK constraints of the relational store
        if t.airline(airline_id).is_none() || t.airport(airport_id).is_none() {
            return Err(ServiceError::Db("airline_airports foreign key violation".into()));
        }
        t.links.push(Tables::link(airline_id, airport_id));
        Ok(())
    }

    async fn replace_airports(&self, airline_id: Uuid, airport_ids: &[Uuid]) -> Result<(), ServiceError> {
        let mut t = self.inner.write().await;
        if t.airline(airline_id).is_none() || airport_ids.iter().any(|id| t.airport(*id).is_none()) {
            return Err(ServiceError::Db("airline_airports foreign key violation".into()));
        }
        t.links.retain(|l| l.airline_id != airline_id);
        t.links.extend(airport_ids.iter().map(|id| Tables::link(airline_id, *id)));
        Ok(())
    }

    async fn remove_airport(&self, airline_id: Uuid, airport_id: Uuid) -> Result<u64, ServiceError> {
        let mut t = self.inner.write().await;
        let before = t.links.len();
        t.links.retain(|l| !(l.airline_id == airline_id && l.airport_id == airport_id));
        Ok((before - t.links.len()) as u64)
    }
}

#[async_trait]
impl AirportRepository for MemoryStore {
    async fn list_airports(&self) -> Result<Vec<AirportWithAirlines>, ServiceError> {
        let t = self.inner.read().await;
        Ok(t.airports
            .iter()
            .map(|a| AirportWithAirlines { airport: a.clone(), airlines: t.airlines_of(a.id) })
            .collect())
    }

    async fn get_airport(&self, id: Uuid) -> Result<Option<airport::Model>, ServiceError> {
        Ok(self.inner.read().await.airport(id).cloned())
    }

    async fn get_airport_with_airlines(&self, id: Uuid) -> Result<Option<AirportWithAirlines>, ServiceError> {
        let t = self.inner.read().await;
        Ok(t.airport(id).map(|a| AirportWithAirlines { airport: a.clone(), airlines: t.airlines_of(id) }))
    }

    async fn insert_airport(&self, input: AirportInput) -> Result<airport::Model, ServiceError> {
        let model = airport::Model {
            id: Uuid::new_v4(),
            name: input.name,
            code: input.code,
            country: input.country,
            city: input.city,
        };
        self.inner.write().await.airports.push(model.clone());
        Ok(model)
    }

    async fn update_airport(&self, id: Uuid, input: AirportInput) -> Result<Option<airport::Model>, ServiceError> {
        let mut t = self.inner.write().await;
        let Some(existing) = t.airports.iter_mut().find(|a| a.id == id) else { return Ok(None); };
        existing.name = input.name;
        existing.code = input.code;
        existing.country = input.country;
        existing.city = input.city;
        Ok(Some(existing.clone()))
    }

    async fn delete_airport(&self, id: Uuid) -> Result<bool, ServiceError> {
        let mut t = self.inner.write().await;
        let before = t.airports.len();
        t.airports.retain(|a| a.id != id);
        if t.airports.len() == before { return Ok(false); }
        t.links.retain(|l| l.airport_id != id);
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn airline_input() -> AirlineInput {
        AirlineInput {
            name: "Avianca".into(),
            description: "flag carrier".into(),
            foundation_date: NaiveDate::from_ymd_opt(1919, 12, 5).unwrap(),
            web_page: "https://www.avianca.com".into(),
        }
    }

    fn airport_input(code: &str) -> AirportInput {
        AirportInput { name: format!("airport {code}"), code: code.into(), country: "Colombia".into(), city: "Cali".into() }
    }

    #[tokio::test]
    async fn both_views_read_one_relation() -> Result<(), ServiceError> {
        let store = MemoryStore::new();
        let al = store.insert_airline(airline_input()).await?;
        let ap = store.insert_airport(airport_input("CLO")).await?;

        store.add_airport(al.id, ap.id).await?;
        let forward = store.get_airline_with_airports(al.id).await?.unwrap();
        let reverse = store.get_airport_with_airlines(ap.id).await?.unwrap();
        assert_eq!(forward.airports, vec![ap.clone()]);
        assert_eq!(reverse.airlines, vec![al.clone()]);
        assert_eq!(store.link_count().await, 1);
        Ok(())
    }

    #[tokio::test]
    async fn deleting_either_side_drops_only_links() -> Result<(), ServiceError> {
        let store = MemoryStore::new();
        let al = store.insert_airline(airline_input()).await?;
        let ap = store.insert_airport(airport_input("MDE")).await?;
        store.add_airport(al.id, ap.id).await?;

        assert!(store.delete_airline(al.id).await?);
        assert_eq!(store.link_count().await, 0);
        assert!(store.get_airport(ap.id).await?.is_some());
        assert!(!store.delete_airline(al.id).await?);
        Ok(())
    }

    #[tokio::test]
    async fn links_to_missing_rows_are_rejected() -> Result<(), ServiceError> {
        let store = MemoryStore::new();
        let al = store.insert_airline(airline_input()).await?;
        let err = store.add_airport(al.id, Uuid::new_v4()).await.unwrap_err();
        assert!(!err.is_business());
        let err = store.replace_airports(al.id, &[Uuid::new_v4()]).await.unwrap_err();
        assert!(!err.is_business());
        Ok(())
    }

    #[tokio::test]
    async fn clones_share_state() -> Result<(), ServiceError> {
        let store = MemoryStore::new();
        let other = store.clone();
        store.insert_airport(airport_input("CTG")).await?;
        assert_eq!(other.list_airports().await?.len(), 1);
        Ok(())
    }
}
