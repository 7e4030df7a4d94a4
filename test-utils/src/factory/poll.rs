//! Poll and poll vote factories.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Utc};
use entity::poll::{PollOption, PollOptions};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

pub struct PollFactory<'a> {
    db: &'a DatabaseConnection,
    title: String,
    description: Option<String>,
    options: Vec<PollOption>,
    is_active: bool,
    expires_at: Option<DateTime<Utc>>,
    created_by: i32,
    created_at: DateTime<Utc>,
}

impl<'a> PollFactory<'a> {
    /// Defaults: title `"Poll {id}"`, active, no expiry, options `Yes` (1) and `No` (2).
    ///
    /// Calling `option()` replaces the default options.
    pub fn new(db: &'a DatabaseConnection, created_by: i32) -> Self {
        Self {
            db,
            title: format!("Poll {}", next_id()),
            description: None,
            options: Vec::new(),
            is_active: true,
            expires_at: None,
            created_by,
            created_at: Utc::now(),
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn option(mut self, id: i32, text: impl Into<String>) -> Self {
        self.options.push(PollOption {
            id,
            text: text.into(),
        });
        self
    }

    pub fn closed(mut self) -> Self {
        self.is_active = false;
        self
    }

    pub fn expires_at(mut self, expires_at: DateTime<Utc>) -> Self {
        self.expires_at = Some(expires_at);
        self
    }

    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    pub async fn build(self) -> Result<entity::poll::Model, DbErr> {
        let options = if self.options.is_empty() {
            vec![
                PollOption {
                    id: 1,
                    text: "Yes".to_string(),
                },
                PollOption {
                    id: 2,
                    text: "No".to_string(),
                },
            ]
        } else {
            self.options
        };

        entity::poll::ActiveModel {
            title: ActiveValue::Set(self.title),
            description: ActiveValue::Set(self.description),
            options: ActiveValue::Set(PollOptions { options }),
            is_active: ActiveValue::Set(self.is_active),
            expires_at: ActiveValue::Set(self.expires_at),
            created_by: ActiveValue::Set(self.created_by),
            created_at: ActiveValue::Set(self.created_at),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

pub async fn create_poll(
    db: &DatabaseConnection,
    created_by: i32,
) -> Result<entity::poll::Model, DbErr> {
    PollFactory::new(db, created_by).build().await
}

pub async fn create_vote(
    db: &DatabaseConnection,
    poll_id: i32,
    user_id: i32,
    option_id: i32,
) -> Result<entity::poll_vote::Model, DbErr> {
    entity::poll_vote::ActiveModel {
        poll_id: ActiveValue::Set(poll_id),
        user_id: ActiveValue::Set(user_id),
        option_id: ActiveValue::Set(option_id),
        created_at: ActiveValue::Set(Utc::now()),
        ..Default::default()
    }
    .insert(db)
    .await
}
