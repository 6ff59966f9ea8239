use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // AirlineAirports: lookups from the airline side
        manager
            .create_index(
                Index::create()
                    .name("idx_airline_airports_airline")
                    .table(AirlineAirports::Table)
                    .col(AirlineAirports::AirlineId)
                    .to_owned(),
            )
            .await?;

        // AirlineAirports: reverse lookups from the airport side
        manager
            .create_index(
                Index::create()
                    .name("idx_airline_airports_airport")
                    .table(AirlineAirports::Table)
                    .col(AirlineAirports::AirportId)
                    .to_owned(),
            )
            .await?;

        // Airports: code lookups
        manager
            .create_index(
                Index::create()
                    .name("idx_airports_code")
                    .table(Airports::Table)
                    .col(Airports::Code)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_airports_code").table(Airports::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_airline_airports_airport").table(AirlineAirports::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_airline_airports_airline").table(AirlineAirports::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum AirlineAirports { Table, AirlineId, AirportId }

#[derive(DeriveIden)]
enum Airports { Table, Code }
