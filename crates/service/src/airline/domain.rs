use chrono::NaiveDate;
use models::{airline, airport};
use serde::{Deserialize, Serialize};

/// Fields an airline is created or overwritten with.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AirlineInput {
    pub name: String,
    pub description: String,
    pub foundation_date: NaiveDate,
    pub web_page: String,
}

/// Airline together with its associated airports, in store order.
/// The same airport may appear more than once.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AirlineWithAirports {
    #[serde(flatten)]
    pub airline: airline::Model,
    pub airports: Vec<airport::Model>,
}

impl AirlineWithAirports {
    pub fn contains_airport(&self, airport_id: uuid::Uuid) -> bool {
        self.airports.iter().any(|a| a.id == airport_id)
    }
}
