//! Document and document share factories.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Utc};
use entity::document::DocumentSource;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for uploaded or Drive-imported documents.
///
/// # Example
///
/// ```rust,ignore
/// let doc = DocumentFactory::new(&db, user.id)
///     .title("Exam Timetable")
///     .category("Exams")
///     .drive("1AbC")
///     .build()
///     .await?;
/// ```
pub struct DocumentFactory<'a> {
    db: &'a DatabaseConnection,
    title: String,
    category: String,
    description: Option<String>,
    file_url: String,
    file_size: i64,
    uploaded_by: i32,
    source: DocumentSource,
    drive_file_id: Option<String>,
    mime_type: Option<String>,
    created_at: DateTime<Utc>,
}

impl<'a> DocumentFactory<'a> {
    /// Defaults: title `"Document {id}"`, category `"General"`, 1024 bytes, uploaded source.
    pub fn new(db: &'a DatabaseConnection, uploaded_by: i32) -> Self {
        let id = next_id();
        Self {
            db,
            title: format!("Document {}", id),
            category: "General".to_string(),
            description: None,
            file_url: format!("https://files.school.test/{}.pdf", id),
            file_size: 1024,
            uploaded_by,
            source: DocumentSource::Upload,
            drive_file_id: None,
            mime_type: None,
            created_at: Utc::now(),
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Marks the document as imported from Google Drive with the given file id.
    pub fn drive(mut self, drive_file_id: impl Into<String>) -> Self {
        let drive_file_id = drive_file_id.into();
        self.file_url = format!("https://drive.google.com/file/d/{}/view", drive_file_id);
        self.source = DocumentSource::Drive;
        self.drive_file_id = Some(drive_file_id);
        self
    }

    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    pub async fn build(self) -> Result<entity::document::Model, DbErr> {
        entity::document::ActiveModel {
            title: ActiveValue::Set(self.title),
            category: ActiveValue::Set(self.category),
            description: ActiveValue::Set(self.description),
            file_url: ActiveValue::Set(self.file_url),
            file_size: ActiveValue::Set(self.file_size),
            uploaded_by: ActiveValue::Set(self.uploaded_by),
            source: ActiveValue::Set(self.source),
            drive_file_id: ActiveValue::Set(self.drive_file_id),
            mime_type: ActiveValue::Set(self.mime_type),
            created_at: ActiveValue::Set(self.created_at),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

pub async fn create_document(
    db: &DatabaseConnection,
    uploaded_by: i32,
) -> Result<entity::document::Model, DbErr> {
    DocumentFactory::new(db, uploaded_by).build().await
}

/// Shares `document_id` with `user_id` on behalf of `shared_by`.
pub async fn create_share(
    db: &DatabaseConnection,
    document_id: i32,
    user_id: i32,
    shared_by: i32,
) -> Result<entity::document_share::Model, DbErr> {
    entity::document_share::ActiveModel {
        document_id: ActiveValue::Set(document_id),
        user_id: ActiveValue::Set(user_id),
        shared_by: ActiveValue::Set(shared_by),
        created_at: ActiveValue::Set(Utc::now()),
        ..Default::default()
    }
    .insert(db)
    .await
}
