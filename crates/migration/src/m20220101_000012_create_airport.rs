//! Create `airports` table.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Airports::Table)
                    .if_not_exists()
                    .col(uuid(Airports::Id).primary_key())
                    .col(string_len(Airports::Name, 256).not_null())
                    // length is enforced by the service layer, not the column
                    .col(string_len(Airports::Code, 16).not_null())
                    .col(string_len(Airports::Country, 128).not_null())
                    .col(string_len(Airports::City, 128).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Airports::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Airports { Table, Id, Name, Code, Country, City }
