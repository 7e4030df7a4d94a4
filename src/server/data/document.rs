use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    ModelTrait, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};

use crate::server::{
    data::contains_ignore_case,
    model::{
        document::{CreateDocumentParams, Document, DocumentFilter},
        page::Page,
    },
};

pub struct DocumentRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> DocumentRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: CreateDocumentParams) -> Result<Document, DbErr> {
        let document = entity::document::ActiveModel {
            title: ActiveValue::Set(params.title),
            category: ActiveValue::Set(params.category),
            description: ActiveValue::Set(params.description),
            file_url: ActiveValue::Set(params.file_url),
            file_size: ActiveValue::Set(params.file_size),
            uploaded_by: ActiveValue::Set(params.uploaded_by),
            source: ActiveValue::Set(params.source),
            drive_file_id: ActiveValue::Set(params.drive_file_id),
            mime_type: ActiveValue::Set(params.mime_type),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Document::from_entity(document))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Document>, DbErr> {
        let document = entity::prelude::Document::find_by_id(id).one(self.db).await?;

        Ok(document.map(Document::from_entity))
    }

    /// A Drive file the user already imported, if any.
    pub async fn find_drive_import(
        &self,
        uploaded_by: i32,
        drive_file_id: &str,
    ) -> Result<Option<Document>, DbErr> {
        let document = entity::prelude::Document::find()
            .filter(entity::document::Column::UploadedBy.eq(uploaded_by))
            .filter(entity::document::Column::DriveFileId.eq(drive_file_id))
            .one(self.db)
            .await?;

        Ok(document.map(Document::from_entity))
    }

    /// Documents matching the filter, newest first.
    pub async fn get_all(&self, filter: &DocumentFilter) -> Result<Vec<Document>, DbErr> {
        let mut query = entity::prelude::Document::find();

        if let Some(category) = &filter.category {
            query = query.filter(entity::document::Column::Category.eq(category.as_str()));
        }
        if let Some(search) = &filter.search {
            query = query.filter(contains_ignore_case(
                (entity::document::Entity, entity::document::Column::Title),
                search,
            ));
        }

        let documents = query
            .order_by_desc(entity::document::Column::CreatedAt)
            .order_by_desc(entity::document::Column::Id)
            .offset(filter.page.skip)
            .limit(filter.page.limit)
            .all(self.db)
            .await?;

        Ok(documents.into_iter().map(Document::from_entity).collect())
    }

    /// Documents shared with the user, most recently shared first.
    pub async fn get_shared_with(
        &self,
        user_id: i32,
        page: Page,
    ) -> Result<Vec<Document>, DbErr> {
        let documents = entity::prelude::Document::find()
            .inner_join(entity::prelude::DocumentShare)
            .filter(entity::document_share::Column::UserId.eq(user_id))
            .order_by_desc(entity::document_share::Column::CreatedAt)
            .order_by_desc(entity::document_share::Column::Id)
            .offset(page.skip)
            .limit(page.limit)
            .all(self.db)
            .await?;

        Ok(documents.into_iter().map(Document::from_entity).collect())
    }

    /// Deletes the document (shares cascade) and returns it as it was.
    ///
    /// # Returns
    /// - `Ok(Some(Document))` - Deleted document
    /// - `Ok(None)` - No document with that id
    pub async fn delete(&self, id: i32) -> Result<Option<Document>, DbErr> {
        let Some(document) = entity::prelude::Document::find_by_id(id).one(self.db).await?
        else {
            return Ok(None);
        };

        let deleted = Document::from_entity(document.clone());
        document.delete(self.db).await?;

        Ok(Some(deleted))
    }

    pub async fn count(&self) -> Result<u64, DbErr> {
        entity::prelude::Document::find().count(self.db).await
    }

    /// Ids of users the document is already shared with.
    pub async fn get_share_recipients(&self, document_id: i32) -> Result<Vec<i32>, DbErr> {
        entity::prelude::DocumentShare::find()
            .select_only()
            .column(entity::document_share::Column::UserId)
            .filter(entity::document_share::Column::DocumentId.eq(document_id))
            .into_tuple::<i32>()
            .all(self.db)
            .await
    }

    pub async fn create_share(
        &self,
        document_id: i32,
        user_id: i32,
        shared_by: i32,
    ) -> Result<(), DbErr> {
        entity::document_share::ActiveModel {
            document_id: ActiveValue::Set(document_id),
            user_id: ActiveValue::Set(user_id),
            shared_by: ActiveValue::Set(shared_by),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(())
    }
}
