use sea_orm_migration::{prelude::*, schema::*};

use super::m20260101_000001_create_user_table::User;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Poll::Table)
                    .if_not_exists()
                    .col(pk_auto(Poll::Id))
                    .col(string_len(Poll::Title, 255))
                    .col(text_null(Poll::Description))
                    .col(json(Poll::Options))
                    .col(boolean(Poll::IsActive).default(true))
                    .col(timestamp_with_time_zone_null(Poll::ExpiresAt))
                    .col(integer(Poll::CreatedBy))
                    .col(
                        timestamp_with_time_zone(Poll::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_poll_created_by")
                            .from(Poll::Table, Poll::CreatedBy)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Poll::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Poll {
    #[sea_orm(iden = "polls")]
    Table,
    Id,
    Title,
    Description,
    Options,
    IsActive,
    ExpiresAt,
    CreatedBy,
    CreatedAt,
}
