//! Airline records: domain types, store abstraction and CRUD service.

pub mod domain;
pub mod repository;
pub mod service;

pub use service::AirlineService;
