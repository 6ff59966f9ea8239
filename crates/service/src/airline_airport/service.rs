use std::sync::Arc;

use tracing::{info, instrument, warn};
use uuid::Uuid;

use models::airport;

use crate::airline::domain::AirlineWithAirports;
use crate::airline::repository::AirlineRepository;
use crate::airport::repository::AirportRepository;
use crate::errors::ServiceError;

/// Manages the airline/airport association.
///
/// Existence checks always run before membership checks, so an unknown
/// airline or airport is reported as not found rather than not associated.
///
/// Checks and the write that follows are separate store calls. Only the
/// write itself is atomic: if a concurrent delete removes the airline or
/// airport in between, the write fails with the store's `Db` error (a
/// foreign key violation) instead of `NotFound`.
///
/// ```
/// use std::sync::Arc;
/// use chrono::NaiveDate;
/// use service::airline::domain::AirlineInput;
/// use service::airline::repository::AirlineRepository;
/// use service::airport::domain::AirportInput;
/// use service::airport::repository::AirportRepository;
/// use service::storage::MemoryStore;
/// use service::AirlineAirportService;
///
/// tokio_test::block_on(async {
///     let store = Arc::new(MemoryStore::new());
///     let airline = store
///         .insert_airline(AirlineInput {
///             name: "Avianca".into(),
///             description: "flag carrier".into(),
///             foundation_date: NaiveDate::from_ymd_opt(1919, 12, 5).unwrap(),
///             web_page: "https://www.avianca.com".into(),
///         })
///         .await
///         .unwrap();
///     let airport = store
///         .insert_airport(AirportInput {
///             name: "El Dorado".into(),
///             code: "BOG".into(),
///             country: "Colombia".into(),
///             city: "Bogota".into(),
///         })
///         .await
///         .unwrap();
///
///     let svc = AirlineAirportService::new(store.clone(), store);
///     let linked = svc.add_airport_to_airline(airline.id, airport.id).await.unwrap();
///     assert_eq!(linked.airports.len(), 1);
/// });
/// ```
pub struct AirlineAirportService<A: AirlineRepository + ?Sized, P: AirportRepository + ?Sized> {
    airlines: Arc<A>,
    airports: Arc<P>,
}

impl<A: AirlineRepository + ?Sized, P: AirportRepository + ?Sized> AirlineAirportService<A, P> {
    pub fn new(airlines: Arc<A>, airports: Arc<P>) -> Self { Self { airlines, airports } }

    async fn require_airline(&self, airline_id: Uuid) -> Result<AirlineWithAirports, ServiceError> {
        self.airlines
            .get_airline_with_airports(airline_id)
            .await?
            .ok_or_else(ServiceError::airline_not_found)
    }

    async fn require_airport(&self, airport_id: Uuid) -> Result<airport::Model, ServiceError> {
        self.airports
            .get_airport(airport_id)
            .await?
            .ok_or_else(ServiceError::airport_not_found)
    }

    /// Links the airport to the airline. Linking an already linked pair adds a
    /// second entry.
    #[instrument(skip(self), fields(airline_id = %airline_id, airport_id = %airport_id))]
    pub async fn add_airport_to_airline(
        &self,
        airline_id: Uuid,
        airport_id: Uuid,
    ) -> Result<AirlineWithAirports, ServiceError> {
        self.require_airport(airport_id).await?;
        self.require_airline(airline_id).await?;
        self.airlines.add_airport(airline_id, airport_id).await?;
        info!("airport_linked");
        self.require_airline(airline_id).await
    }

    #[instrument(skip(self), fields(airline_id = %airline_id, airport_id = %airport_id))]
    pub async fn find_airport_by_airline_id_airport_id(
        &self,
        airline_id: Uuid,
        airport_id: Uuid,
    ) -> Result<airport::Model, ServiceError> {
        let airline = self.require_airline(airline_id).await?;
        let airport = self.require_airport(airport_id).await?;
        if !airline.contains_airport(airport_id) {
            return Err(ServiceError::airport_not_associated());
        }
        Ok(airport)
    }

    #[instrument(skip(self), fields(airline_id = %airline_id))]
    pub async fn find_airports_by_airline_id(&self, airline_id: Uuid) -> Result<Vec<airport::Model>, ServiceError> {
        Ok(self.require_airline(airline_id).await?.airports)
    }

    /// Replaces the airline's airports with `airport_ids`. Every id must exist;
    /// the first unknown one aborts the call and leaves the relation untouched.
    #[instrument(skip(self, airport_ids), fields(airline_id = %airline_id, count = airport_ids.len()))]
    pub async fn update_airports_for_airline(
        &self,
        airline_id: Uuid,
        airport_ids: &[Uuid],
    ) -> Result<AirlineWithAirports, ServiceError> {
        self.require_airline(airline_id).await?;
        for id in airport_ids {
            if let Err(e) = self.require_airport(*id).await {
                warn!(airport_id = %id, "replace_rejected_unknown_airport");
                return Err(e);
            }
        }
        self.airlines.replace_airports(airline_id, airport_ids).await?;
        info!("airports_replaced");
        self.require_airline(airline_id).await
    }

    /// Removes every link between the pair.
    #[instrument(skip(self), fields(airline_id = %airline_id, airport_id = %airport_id))]
    pub async fn delete_airport_from_airline(&self, airline_id: Uuid, airport_id: Uuid) -> Result<(), ServiceError> {
        let airline = self.require_airline(airline_id).await?;
        self.require_airport(airport_id).await?;
        if !airline.contains_airport(airport_id) {
            return Err(ServiceError::airport_not_associated());
        }
        let removed = self.airlines.remove_airport(airline_id, airport_id).await?;
        info!(removed, "airport_unlinked");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::airline::domain::AirlineInput;
    use crate::airport::domain::AirportInput;
    use crate::errors::ErrorKind;
    use crate::storage::MemoryStore;
    use crate::AirportService;
    use chrono::NaiveDate;
    use models::airline;

    struct Fixture {
        store: Arc<MemoryStore>,
        svc: AirlineAirportService<MemoryStore, MemoryStore>,
        airline: airline::Model,
        airports: Vec<airport::Model>,
    }

    async fn fixture() -> Fixture {
        let store = Arc::new(MemoryStore::new());
        let airline = store
            .insert_airline(AirlineInput {
                name: "Avianca".into(),
                description: "flag carrier".into(),
                foundation_date: NaiveDate::from_ymd_opt(1919, 12, 5).unwrap(),
                web_page: "https://www.avianca.com".into(),
            })
            .await
            .unwrap();
        let mut airports = Vec::new();
        for code in ["BOG", "MDE", "CLO"] {
            airports.push(
                store
                    .insert_airport(AirportInput {
                        name: format!("airport {code}"),
                        code: code.into(),
                        country: "Colombia".into(),
                        city: "city".into(),
                    })
                    .await
                    .unwrap(),
            );
        }
        let svc = AirlineAirportService::new(store.clone(), store.clone());
        Fixture { store, svc, airline, airports }
    }

    #[tokio::test]
    async fn add_links_airport_and_is_visible_from_both_sides() -> Result<(), ServiceError> {
        let f = fixture().await;
        let linked = f.svc.add_airport_to_airline(f.airline.id, f.airports[0].id).await?;
        assert_eq!(linked.airline.id, f.airline.id);
        assert_eq!(linked.airports, vec![f.airports[0].clone()]);

        let airport_svc = AirportService::new(f.store.clone());
        let seen = airport_svc.find_one(f.airports[0].id).await?;
        assert_eq!(seen.airlines.len(), 1);
        assert_eq!(seen.airlines[0].id, f.airline.id);
        Ok(())
    }

    #[tokio::test]
    async fn add_same_pair_twice_keeps_both_entries() -> Result<(), ServiceError> {
        let f = fixture().await;
        f.svc.add_airport_to_airline(f.airline.id, f.airports[0].id).await?;
        let linked = f.svc.add_airport_to_airline(f.airline.id, f.airports[0].id).await?;
        assert_eq!(linked.airports.len(), 2);
        assert_eq!(f.store.link_count().await, 2);
        Ok(())
    }

    #[tokio::test]
    async fn add_checks_airport_before_airline() {
        let f = fixture().await;
        let err = f.svc.add_airport_to_airline(Uuid::new_v4(), Uuid::new_v4()).await.unwrap_err();
        assert_eq!(err.to_string(), "The aeropuerto with the given id was not found");

        let err = f.svc.add_airport_to_airline(Uuid::new_v4(), f.airports[0].id).await.unwrap_err();
        assert_eq!(err.to_string(), "The aerolinea with the given id was not found");
        assert_eq!(f.store.link_count().await, 0);
    }

    #[tokio::test]
    async fn find_linked_airport() -> Result<(), ServiceError> {
        let f = fixture().await;
        f.svc.add_airport_to_airline(f.airline.id, f.airports[1].id).await?;
        let found = f.svc.find_airport_by_airline_id_airport_id(f.airline.id, f.airports[1].id).await?;
        assert_eq!(found, f.airports[1]);
        Ok(())
    }

    #[tokio::test]
    async fn find_unlinked_airport_is_not_associated() -> Result<(), ServiceError> {
        let f = fixture().await;
        f.svc.add_airport_to_airline(f.airline.id, f.airports[0].id).await?;
        let err = f
            .svc
            .find_airport_by_airline_id_airport_id(f.airline.id, f.airports[1].id)
            .await
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotAssociated);
        assert_eq!(err.to_string(), "The aeropuerto with the given id is not associated to the aerolinea");
        Ok(())
    }

    #[tokio::test]
    async fn find_reports_missing_entities_before_membership() {
        let f = fixture().await;
        let err = f
            .svc
            .find_airport_by_airline_id_airport_id(Uuid::new_v4(), Uuid::new_v4())
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "The aerolinea with the given id was not found");

        let err = f
            .svc
            .find_airport_by_airline_id_airport_id(f.airline.id, Uuid::new_v4())
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "The aeropuerto with the given id was not found");
    }

    #[tokio::test]
    async fn list_airports_of_airline() -> Result<(), ServiceError> {
        let f = fixture().await;
        assert!(f.svc.find_airports_by_airline_id(f.airline.id).await?.is_empty());
        f.svc.add_airport_to_airline(f.airline.id, f.airports[0].id).await?;
        f.svc.add_airport_to_airline(f.airline.id, f.airports[2].id).await?;
        let listed = f.svc.find_airports_by_airline_id(f.airline.id).await?;
        assert_eq!(listed, vec![f.airports[0].clone(), f.airports[2].clone()]);

        let err = f.svc.find_airports_by_airline_id(Uuid::new_v4()).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);
        Ok(())
    }

    #[tokio::test]
    async fn update_replaces_whole_set() -> Result<(), ServiceError> {
        let f = fixture().await;
        f.svc.add_airport_to_airline(f.airline.id, f.airports[0].id).await?;
        f.svc.add_airport_to_airline(f.airline.id, f.airports[1].id).await?;
        let updated = f.svc.update_airports_for_airline(f.airline.id, &[f.airports[2].id]).await?;
        assert_eq!(updated.airports, vec![f.airports[2].clone()]);
        assert_eq!(f.store.link_count().await, 1);

        let airport_svc = AirportService::new(f.store.clone());
        assert!(airport_svc.find_one(f.airports[0].id).await?.airlines.is_empty());
        assert!(airport_svc.find_one(f.airports[1].id).await?.airlines.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn update_keeps_requested_order() -> Result<(), ServiceError> {
        let f = fixture().await;
        let ids = [f.airports[2].id, f.airports[1].id];
        let updated = f.svc.update_airports_for_airline(f.airline.id, &ids).await?;
        assert_eq!(updated.airports, vec![f.airports[2].clone(), f.airports[1].clone()]);
        Ok(())
    }

    #[tokio::test]
    async fn update_with_empty_list_clears_links() -> Result<(), ServiceError> {
        let f = fixture().await;
        f.svc.add_airport_to_airline(f.airline.id, f.airports[0].id).await?;
        let updated = f.svc.update_airports_for_airline(f.airline.id, &[]).await?;
        assert!(updated.airports.is_empty());
        assert_eq!(f.store.link_count().await, 0);
        Ok(())
    }

    #[tokio::test]
    async fn update_with_unknown_airport_changes_nothing() -> Result<(), ServiceError> {
        let f = fixture().await;
        f.svc.add_airport_to_airline(f.airline.id, f.airports[0].id).await?;
        let err = f
            .svc
            .update_airports_for_airline(f.airline.id, &[f.airports[1].id, Uuid::new_v4()])
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "The aeropuerto with the given id was not found");
        let listed = f.svc.find_airports_by_airline_id(f.airline.id).await?;
        assert_eq!(listed, vec![f.airports[0].clone()]);

        let err = f.svc.update_airports_for_airline(Uuid::new_v4(), &[f.airports[1].id]).await.unwrap_err();
        assert_eq!(err.to_string(), "The aerolinea with the given id was not found");
        Ok(())
    }

    #[tokio::test]
    async fn delete_unlinks_only_that_pair() -> Result<(), ServiceError> {
        let f = fixture().await;
        f.svc.add_airport_to_airline(f.airline.id, f.airports[0].id).await?;
        f.svc.add_airport_to_airline(f.airline.id, f.airports[0].id).await?;
        f.svc.add_airport_to_airline(f.airline.id, f.airports[1].id).await?;
        f.svc.delete_airport_from_airline(f.airline.id, f.airports[0].id).await?;
        let listed = f.svc.find_airports_by_airline_id(f.airline.id).await?;
        assert_eq!(listed, vec![f.airports[1].clone()]);

        let err = f.svc.delete_airport_from_airline(f.airline.id, f.airports[0].id).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotAssociated);
        Ok(())
    }

    #[tokio::test]
    async fn delete_unlinked_airport_leaves_other_links() -> Result<(), ServiceError> {
        let f = fixture().await;
        f.svc.add_airport_to_airline(f.airline.id, f.airports[0].id).await?;
        let err = f.svc.delete_airport_from_airline(f.airline.id, f.airports[2].id).await.unwrap_err();
        assert_eq!(err.to_string(), "The aeropuerto with the given id is not associated to the aerolinea");
        assert_eq!(f.store.link_count().await, 1);

        let err = f.svc.delete_airport_from_airline(Uuid::new_v4(), f.airports[0].id).await.unwrap_err();
        assert_eq!(err.to_string(), "The aerolinea with the given id was not found");
        let err = f.svc.delete_airport_from_airline(f.airline.id, Uuid::new_v4()).await.unwrap_err();
        assert_eq!(err.to_string(), "The aeropuerto with the given id was not found");
        Ok(())
    }
}
