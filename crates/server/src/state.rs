use std::sync::Arc;

use sea_orm::DatabaseConnection;
use service::airline::repository::{AirlineRepository, SeaOrmAirlineRepository};
use service::airport::repository::{AirportRepository, SeaOrmAirportRepository};
use service::storage::MemoryStore;
use service::{AirlineAirportService, AirlineService, AirportService};

pub type Associations = AirlineAirportService<dyn AirlineRepository, dyn AirportRepository>;

/// Services shared by every handler.
#[derive(Clone)]
pub struct ServerState {
    pub airlines: Arc<AirlineService<dyn AirlineRepository>>,
    pub airports: Arc<AirportService<dyn AirportRepository>>,
    pub associations: Arc<Associations>,
}

impl ServerState {
    pub fn new(airline_repo: Arc<dyn AirlineRepository>, airport_repo: Arc<dyn AirportRepository>) -> Self {
        Self {
            airlines: Arc::new(AirlineService::new(airline_repo.clone())),
            airports: Arc::new(AirportService::new(airport_repo.clone())),
            associations: Arc::new(AirlineAirportService::new(airline_repo, airport_repo)),
        }
    }

    pub fn from_db(db: DatabaseConnection) -> Self {
        Self::new(
            Arc::new(SeaOrmAirlineRepository { db: db.clone() }),
            Arc::new(SeaOrmAirportRepository { db }),
        )
    }

    /// State over a fresh in-process store.
    pub fn in_memory() -> Self {
        let store = Arc::new(MemoryStore::new());
        Self::new(store.clone(), store)
    }
}
