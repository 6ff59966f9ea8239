//! SeaORM entities for airlines, airports and the relation between them,
//! plus the field validation rules shared by the service and HTTP layers.

pub mod errors;
pub mod db;
pub mod airline;
pub mod airport;
pub mod airline_airport;

pub use errors::validate_not_empty;
