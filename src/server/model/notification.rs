//! Notification domain models and parameters.

use chrono::{DateTime, Utc};
use entity::notification::NotificationKind;

use crate::model::notification::{NotificationDto, NotificationKindDto};

use super::page::Page;

#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub id: i32,
    pub user_id: i32,
    pub title: String,
    pub message: String,
    pub kind: NotificationKind,
    pub is_read: bool,
    pub created_at: DateTime<Utc>,
}

impl Notification {
    pub fn from_entity(entity: entity::notification::Model) -> Self {
        Self {
            id: entity.id,
            user_id: entity.user_id,
            title: entity.title,
            message: entity.message,
            kind: entity.kind,
            is_read: entity.is_read,
            created_at: entity.created_at,
        }
    }

    pub fn into_dto(self) -> NotificationDto {
        NotificationDto {
            id: self.id,
            title: self.title,
            message: self.message,
            kind: NotificationKindDto::from(self.kind),
            is_read: self.is_read,
            created_at: self.created_at,
        }
    }
}

impl From<NotificationKindDto> for NotificationKind {
    fn from(kind: NotificationKindDto) -> Self {
        match kind {
            NotificationKindDto::Info => NotificationKind::Info,
            NotificationKindDto::Success => NotificationKind::Success,
            NotificationKindDto::Warning => NotificationKind::Warning,
            NotificationKindDto::Error => NotificationKind::Error,
        }
    }
}

impl From<NotificationKind> for NotificationKindDto {
    fn from(kind: NotificationKind) -> Self {
        match kind {
            NotificationKind::Info => NotificationKindDto::Info,
            NotificationKind::Success => NotificationKindDto::Success,
            NotificationKind::Warning => NotificationKindDto::Warning,
            NotificationKind::Error => NotificationKindDto::Error,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateNotificationParams {
    pub user_id: i32,
    pub title: String,
    pub message: String,
    pub kind: NotificationKind,
}

#[derive(Debug, Clone, Default)]
pub struct NotificationFilter {
    pub unread_only: bool,
    pub page: Page,
}
