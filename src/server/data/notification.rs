use chrono::{DateTime, Utc};
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr,
    EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};

use crate::server::model::notification::{
    CreateNotificationParams, Notification, NotificationFilter,
};

pub struct NotificationRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> NotificationRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: CreateNotificationParams) -> Result<Notification, DbErr> {
        let notification = active_model(params).insert(self.db).await?;

        Ok(Notification::from_entity(notification))
    }

    /// Inserts all notifications in one statement.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of rows inserted
    pub async fn create_many(&self, params: Vec<CreateNotificationParams>) -> Result<u64, DbErr> {
        if params.is_empty() {
            return Ok(0);
        }

        let count = params.len() as u64;
        entity::prelude::Notification::insert_many(params.into_iter().map(active_model))
            .exec_without_returning(self.db)
            .await?;

        Ok(count)
    }

    /// The user's notifications, newest first.
    pub async fn get_for_user(
        &self,
        user_id: i32,
        filter: &NotificationFilter,
    ) -> Result<Vec<Notification>, DbErr> {
        let mut query = entity::prelude::Notification::find()
            .filter(entity::notification::Column::UserId.eq(user_id));

        if filter.unread_only {
            query = query.filter(entity::notification::Column::IsRead.eq(false));
        }

        let notifications = query
            .order_by_desc(entity::notification::Column::CreatedAt)
            .order_by_desc(entity::notification::Column::Id)
            .offset(filter.page.skip)
            .limit(filter.page.limit)
            .all(self.db)
            .await?;

        Ok(notifications
            .into_iter()
            .map(Notification::from_entity)
            .collect())
    }

    pub async fn count_unread(&self, user_id: i32) -> Result<u64, DbErr> {
        entity::prelude::Notification::find()
            .filter(entity::notification::Column::UserId.eq(user_id))
            .filter(entity::notification::Column::IsRead.eq(false))
            .count(self.db)
            .await
    }

    pub async fn count_created_since(&self, since: DateTime<Utc>) -> Result<u64, DbErr> {
        entity::prelude::Notification::find()
            .filter(entity::notification::Column::CreatedAt.gte(since))
            .count(self.db)
            .await
    }

    /// Marks one notification read if it belongs to the user.
    ///
    /// # Returns
    /// - `Ok(true)` - Notification found and marked (or already read)
    /// - `Ok(false)` - No such notification for this user
    pub async fn mark_read(&self, id: i32, user_id: i32) -> Result<bool, DbErr> {
        let Some(notification) = entity::prelude::Notification::find_by_id(id)
            .filter(entity::notification::Column::UserId.eq(user_id))
            .one(self.db)
            .await?
        else {
            return Ok(false);
        };

        if !notification.is_read {
            let mut active: entity::notification::ActiveModel = notification.into();
            active.is_read = ActiveValue::Set(true);
            active.update(self.db).await?;
        }

        Ok(true)
    }

    /// Marks every unread notification of the user read.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of notifications changed
    pub async fn mark_all_read(&self, user_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::Notification::update_many()
            .col_expr(entity::notification::Column::IsRead, Expr::value(true))
            .filter(entity::notification::Column::UserId.eq(user_id))
            .filter(entity::notification::Column::IsRead.eq(false))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}

fn active_model(params: CreateNotificationParams) -> entity::notification::ActiveModel {
    entity::notification::ActiveModel {
        user_id: ActiveValue::Set(params.user_id),
        title: ActiveValue::Set(params.title),
        message: ActiveValue::Set(params.message),
        kind: ActiveValue::Set(params.kind),
        is_read: ActiveValue::Set(false),
        created_at: ActiveValue::Set(Utc::now()),
        ..Default::default()
    }
}
