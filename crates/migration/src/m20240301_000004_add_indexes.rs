use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Activity: lookups by owning ong
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_activity_ong")
                    .table(Activity::Table)
                    .col(Activity::OngId)
                    .to_owned(),
            )
            .await?;

        // Activity: lookups by assignee
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_activity_user")
                    .table(Activity::Table)
                    .col(Activity::UserId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_activity_status")
                    .table(Activity::Table)
                    .col(Activity::Status)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        for name in ["idx_activity_status", "idx_activity_user", "idx_activity_ong"] {
            manager
                .drop_index(Index::drop().name(name).table(Activity::Table).to_owned())
                .await?;
        }
        Ok(())
    }
}

#[derive(DeriveIden)]
enum Activity { Table, OngId, UserId, Status }
