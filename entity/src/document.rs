use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Where the document metadata came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
#[serde(rename_all = "lowercase")]
pub enum DocumentSource {
    #[sea_orm(string_value = "upload")]
    Upload,
    #[sea_orm(string_value = "drive")]
    Drive,
}

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "documents")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub title: String,
    pub category: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    pub file_url: String,
    /// Size in bytes.
    pub file_size: i64,
    pub uploaded_by: i32,
    pub source: DocumentSource,
    pub drive_file_id: Option<String>,
    pub mime_type: Option<String>,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UploadedBy",
        to = "super::user::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    User,
    #[sea_orm(has_many = "super::document_share::Entity")]
    DocumentShare,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::document_share::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::DocumentShare.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
