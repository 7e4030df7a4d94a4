//! Activity feed domain models.

use chrono::{DateTime, Utc};

use crate::model::dashboard::ActivityDto;

/// What kind of change an activity entry records.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivityAction {
    Create,
    Update,
    Delete,
    Upload,
    Close,
    Share,
}

impl ActivityAction {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Create => "create",
            Self::Update => "update",
            Self::Delete => "delete",
            Self::Upload => "upload",
            Self::Close => "close",
            Self::Share => "share",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Activity {
    pub id: i32,
    pub title: String,
    pub author: String,
    pub action_type: String,
    pub entity_type: Option<String>,
    pub entity_id: Option<i32>,
    pub timestamp: DateTime<Utc>,
}

impl Activity {
    pub fn from_entity(entity: entity::activity::Model) -> Self {
        Self {
            id: entity.id,
            title: entity.title,
            author: entity.author,
            action_type: entity.action_type,
            entity_type: entity.entity_type,
            entity_id: entity.entity_id,
            timestamp: entity.timestamp,
        }
    }

    pub fn into_dto(self) -> ActivityDto {
        ActivityDto {
            id: self.id,
            title: self.title,
            author: self.author,
            timestamp: self.timestamp,
        }
    }
}

/// Entry to append to the feed.
#[derive(Debug, Clone)]
pub struct LogActivityParams {
    pub title: String,
    pub author: String,
    pub action: ActivityAction,
    pub entity_type: &'static str,
    pub entity_id: i32,
}
