use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Schedule::Table)
                    .if_not_exists()
                    .col(pk_auto(Schedule::Id))
                    .col(string_len(Schedule::Department, 100))
                    .col(integer(Schedule::ClassCount).default(0))
                    .col(integer(Schedule::StaffCount).default(0))
                    .col(string_len(Schedule::Status, 50).default("Active"))
                    .col(
                        timestamp_with_time_zone(Schedule::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        timestamp_with_time_zone(Schedule::LastUpdated)
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Schedule::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Schedule {
    #[sea_orm(iden = "schedules")]
    Table,
    Id,
    Department,
    ClassCount,
    StaffCount,
    Status,
    CreatedAt,
    LastUpdated,
}
