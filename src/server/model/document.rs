//! Document metadata domain models and parameters.

use chrono::{DateTime, Utc};
use entity::document::DocumentSource;

use crate::model::document::{DocumentDto, DocumentSourceDto};

use super::page::Page;

#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub id: i32,
    pub title: String,
    pub category: String,
    pub description: Option<String>,
    pub file_url: String,
    pub file_size: i64,
    pub uploaded_by: i32,
    pub source: DocumentSource,
    pub drive_file_id: Option<String>,
    pub mime_type: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Document {
    pub fn from_entity(entity: entity::document::Model) -> Self {
        Self {
            id: entity.id,
            title: entity.title,
            category: entity.category,
            description: entity.description,
            file_url: entity.file_url,
            file_size: entity.file_size,
            uploaded_by: entity.uploaded_by,
            source: entity.source,
            drive_file_id: entity.drive_file_id,
            mime_type: entity.mime_type,
            created_at: entity.created_at,
        }
    }

    pub fn into_dto(self) -> DocumentDto {
        DocumentDto {
            id: self.id,
            title: self.title,
            category: self.category,
            description: self.description,
            file_url: self.file_url,
            file_size: self.file_size,
            uploaded_by: self.uploaded_by,
            source: match self.source {
                DocumentSource::Upload => DocumentSourceDto::Upload,
                DocumentSource::Drive => DocumentSourceDto::Drive,
            },
            drive_file_id: self.drive_file_id,
            mime_type: self.mime_type,
            created_at: self.created_at,
        }
    }
}

/// Row to insert. `uploaded_by` is always the caller.
#[derive(Debug, Clone)]
pub struct CreateDocumentParams {
    pub title: String,
    pub category: String,
    pub description: Option<String>,
    pub file_url: String,
    pub file_size: i64,
    pub uploaded_by: i32,
    pub source: DocumentSource,
    pub drive_file_id: Option<String>,
    pub mime_type: Option<String>,
}

/// Metadata of a file the caller picked in Google Drive.
#[derive(Debug, Clone)]
pub struct DriveImportParams {
    pub drive_file_id: String,
    pub title: String,
    pub category: String,
    pub description: Option<String>,
    pub web_view_link: Option<String>,
    pub mime_type: Option<String>,
    pub file_size: i64,
    pub share_with: Vec<i32>,
}

impl DriveImportParams {
    /// Link stored as `file_url`: the picker's view link, else the canonical Drive URL.
    pub fn file_url(&self) -> String {
        self.web_view_link.clone().unwrap_or_else(|| {
            format!("https://drive.google.com/file/d/{}/view", self.drive_file_id)
        })
    }
}

#[derive(Debug, Clone, Default)]
pub struct DocumentFilter {
    pub category: Option<String>,
    /// Case-insensitive substring of the title.
    pub search: Option<String>,
    pub page: Page,
}
