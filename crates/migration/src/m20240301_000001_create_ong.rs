//! Create `ong` table.
//!
//! Organizations publishing activities; `activity` references it.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Ong::Table)
                    .if_not_exists()
                    .col(pk_auto(Ong::Id))
                    .col(string_len(Ong::Name, 128))
                    .col(string_len(Ong::Email, 255).unique_key())
                    .col(text(Ong::Description))
                    .col(string_len_null(Ong::Phone, 32))
                    .col(timestamp_with_time_zone(Ong::CreatedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Ong::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Ong { Table, Id, Name, Email, Description, Phone, CreatedAt }
