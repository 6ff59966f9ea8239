//! Service layer for the airline registry.
//! - Airline and airport CRUD with their field rules.
//! - Management of the many-to-many airline/airport relation.
//! - Store traits with SeaORM-backed and in-memory implementations.

pub mod errors;
pub mod airline;
pub mod airport;
pub mod airline_airport;
pub mod db;
pub mod storage;
#[cfg(test)]
pub mod test_support;

pub use airline::AirlineService;
pub use airline_airport::AirlineAirportService;
pub use airport::AirportService;
