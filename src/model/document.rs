use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Serialize, Deserialize, ToSchema, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum DocumentSourceDto {
    Upload,
    Drive,
}

#[derive(Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DocumentDto {
    pub id: i32,
    pub title: String,
    pub category: String,
    pub description: Option<String>,
    pub file_url: String,
    /// Size in bytes.
    pub file_size: i64,
    pub uploaded_by: i32,
    pub source: DocumentSourceDto,
    pub drive_file_id: Option<String>,
    pub mime_type: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Deserialize, Validate, ToSchema)]
pub struct CreateDocumentDto {
    #[validate(length(min = 1))]
    pub title: String,
    pub category: String,
    pub description: Option<String>,
    pub file_url: String,
    #[serde(default)]
    #[validate(range(min = 0))]
    pub file_size: i64,
}

#[derive(Deserialize, Validate, ToSchema)]
pub struct DriveImportDto {
    #[validate(length(min = 1))]
    pub drive_file_id: String,
    #[validate(length(min = 1))]
    pub title: String,
    pub category: String,
    pub description: Option<String>,
    pub web_view_link: Option<String>,
    pub mime_type: Option<String>,
    #[serde(default)]
    #[validate(range(min = 0))]
    pub file_size: i64,
    /// Users to share the imported document with.
    #[serde(default)]
    pub share_with: Vec<i32>,
}

#[derive(Deserialize, Validate, ToSchema)]
pub struct ShareDocumentDto {
    #[validate(length(min = 1))]
    pub user_ids: Vec<i32>,
}
