//! Create `activity` table with FKs to `ong` (owner) and `user` (assignee).
//!
//! `realization_field` holds the free-form completion payload as JSONB.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Activity::Table)
                    .if_not_exists()
                    .col(pk_auto(Activity::Id))
                    .col(string_len(Activity::Name, 128))
                    .col(integer(Activity::Points))
                    .col(text(Activity::Description))
                    .col(string_len(Activity::MainImg, 512))
                    .col(string_len(Activity::Status, 32))
                    .col(integer(Activity::OngId))
                    .col(integer_null(Activity::UserId))
                    .col(json_binary_null(Activity::RealizationField))
                    .col(timestamp_with_time_zone(Activity::CreatedAt))
                    .col(timestamp_with_time_zone(Activity::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_activity_ong")
                            .from(Activity::Table, Activity::OngId)
                            .to(Ong::Table, Ong::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_activity_user")
                            .from(Activity::Table, Activity::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Activity::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Activity {
    Table,
    Id,
    Name,
    Points,
    Description,
    MainImg,
    Status,
    OngId,
    UserId,
    RealizationField,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Ong { Table, Id }

#[derive(DeriveIden)]
enum User { Table, Id }
