//! Migrator registering entity-specific migrations in dependency order.
//! Indexes are applied last.
pub use sea_orm_migration::prelude::*;

mod m20220101_000011_create_airline;
mod m20220101_000012_create_airport;
mod m20220101_000013_create_airline_airports;
mod m20220101_000002_add_indexes;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20220101_000011_create_airline::Migration),
            Box::new(m20220101_000012_create_airport::Migration),
            Box::new(m20220101_000013_create_airline_airports::Migration),
            // Indexes should always be applied last
            Box::new(m20220101_000002_add_indexes::Migration),
        ]
    }
}
