use chrono::{Duration, Utc};
use entity::notification::NotificationKind;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

use crate::server::{
    data::notification::NotificationRepository,
    model::{
        notification::{CreateNotificationParams, NotificationFilter},
        page::Page,
    },
};

mod create_many;
mod get_for_user;
mod mark_read;

fn params(user_id: i32, title: &str) -> CreateNotificationParams {
    CreateNotificationParams {
        user_id,
        title: title.to_string(),
        message: "Message".to_string(),
        kind: NotificationKind::Info,
    }
}
