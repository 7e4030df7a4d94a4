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
                    .col(string_len(Activity::Title, 255))
                    .col(string_len(Activity::Author, 255))
                    .col(string_len(Activity::ActionType, 50))
                    .col(string_len_null(Activity::EntityType, 50))
                    .col(integer_null(Activity::EntityId))
                    .col(
                        timestamp_with_time_zone(Activity::Timestamp)
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Activity::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Activity {
    #[sea_orm(iden = "activities")]
    Table,
    Id,
    Title,
    Author,
    ActionType,
    EntityType,
    EntityId,
    Timestamp,
}
