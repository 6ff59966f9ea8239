//! Create `airline_airports` join table.
//!
//! Rows carry their own id so the same (airline, airport) pair may appear
//! more than once. Deleting either side removes its rows via cascade.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(AirlineAirports::Table)
                    .if_not_exists()
                    .col(uuid(AirlineAirports::Id).primary_key())
                    .col(uuid(AirlineAirports::AirlineId).not_null())
                    .col(uuid(AirlineAirports::AirportId).not_null())
                    .col(timestamp_with_time_zone(AirlineAirports::CreatedAt).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_airline_airports_airline")
                            .from(AirlineAirports::Table, AirlineAirports::AirlineId)
                            .to(Airlines::Table, Airlines::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_airline_airports_airport")
                            .from(AirlineAirports::Table, AirlineAirports::AirportId)
                            .to(Airports::Table, Airports::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(AirlineAirports::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum AirlineAirports { Table, Id, AirlineId, AirportId, CreatedAt }

#[derive(DeriveIden)]
enum Airlines { Table, Id }

#[derive(DeriveIden)]
enum Airports { Table, Id }
