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
                    .table(Document::Table)
                    .if_not_exists()
                    .col(pk_auto(Document::Id))
                    .col(string_len(Document::Title, 255))
                    .col(string_len(Document::Category, 100))
                    .col(text_null(Document::Description))
                    .col(string_len(Document::FileUrl, 500))
                    .col(big_integer(Document::FileSize).default(0))
                    .col(integer(Document::UploadedBy))
                    .col(string_len(Document::Source, 16).default("upload"))
                    .col(string_len_null(Document::DriveFileId, 255))
                    .col(string_len_null(Document::MimeType, 255))
                    .col(
                        timestamp_with_time_zone(Document::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_document_uploaded_by")
                            .from(Document::Table, Document::UploadedBy)
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
                    .name("idx_document_drive_file_id")
                    .table(Document::Table)
                    .col(Document::DriveFileId)
                    .to_owned(),
            )
            .await?;

        // NULL drive ids are distinct, so plain uploads never collide.
        manager
            .create_index(
                Index::create()
                    .name("uq_document_uploader_drive_file")
                    .table(Document::Table)
                    .col(Document::UploadedBy)
                    .col(Document::DriveFileId)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Document::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Document {
    #[sea_orm(iden = "documents")]
    Table,
    Id,
    Title,
    Category,
    Description,
    FileUrl,
    FileSize,
    UploadedBy,
    Source,
    DriveFileId,
    MimeType,
    CreatedAt,
}
