use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(User::Table)
                    .if_not_exists()
                    .col(pk_auto(User::Id))
                    .col(string_len_uniq(User::Email, 255))
                    .col(string_len(User::Name, 255))
                    .col(string_len_null(User::HashedPassword, 255))
                    .col(string_len(User::Role, 16).default("STUDENT"))
                    .col(string_len_null(User::Avatar, 500))
                    .col(string_len_null(User::Department, 100))
                    .col(string_len_null(User::GoogleId, 255).unique_key())
                    .col(
                        timestamp_with_time_zone(User::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        timestamp_with_time_zone(User::UpdatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(User::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum User {
    #[sea_orm(iden = "users")]
    Table,
    Id,
    Email,
    Name,
    HashedPassword,
    Role,
    Avatar,
    Department,
    GoogleId,
    CreatedAt,
    UpdatedAt,
}
