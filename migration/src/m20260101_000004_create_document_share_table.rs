use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260101_000001_create_user_table::User, m20260101_000003_create_document_table::Document,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(DocumentShare::Table)
                    .if_not_exists()
                    .col(pk_auto(DocumentShare::Id))
                    .col(integer(DocumentShare::DocumentId))
                    .col(integer(DocumentShare::UserId))
                    .col(integer(DocumentShare::SharedBy))
                    .col(
                        timestamp_with_time_zone(DocumentShare::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_document_share_document_id")
                            .from(DocumentShare::Table, DocumentShare::DocumentId)
                            .to(Document::Table, Document::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_document_share_user_id")
                            .from(DocumentShare::Table, DocumentShare::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_document_share_shared_by")
                            .from(DocumentShare::Table, DocumentShare::SharedBy)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("uq_document_share_document_user")
                    .table(DocumentShare::Table)
                    .col(DocumentShare::DocumentId)
                    .col(DocumentShare::UserId)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(DocumentShare::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum DocumentShare {
    #[sea_orm(iden = "document_shares")]
    Table,
    Id,
    DocumentId,
    UserId,
    SharedBy,
    CreatedAt,
}
