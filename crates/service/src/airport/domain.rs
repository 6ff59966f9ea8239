use models::{airline, airport};
use serde::{Deserialize, Serialize};

/// Fields an airport is created or overwritten with.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AirportInput {
    pub name: String,
    pub code: String,
    pub country: String,
    pub city: String,
}

/// Airport together with the airlines linked to it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AirportWithAirlines {
    #[serde(flatten)]
    pub airport: airport::Model,
    pub airlines: Vec<airline::Model>,
}
