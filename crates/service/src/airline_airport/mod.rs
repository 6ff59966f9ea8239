pub mod service;

pub use service::AirlineAirportService;
