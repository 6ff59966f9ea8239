//! Create `airlines` table.
//!
//! One side of the airline/airport relation; links live in `airline_airports`.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Airlines::Table)
                    .if_not_exists()
                    .col(uuid(Airlines::Id).primary_key())
                    .col(string_len(Airlines::Name, 256).not_null())
                    .col(string(Airlines::Description).not_null())
                    .col(date(Airlines::FoundationDate).not_null())
                    .col(string_len(Airlines::WebPage, 512).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Airlines::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Airlines { Table, Id, Name, Description, FoundationDate, WebPage }
