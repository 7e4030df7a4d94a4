use entity::notification::NotificationKind;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::{notification::NotificationRepository, user::UserRepository},
    error::AppError,
    model::notification::{CreateNotificationParams, Notification, NotificationFilter},
};

pub struct NotificationService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> NotificationService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_for_user(
        &self,
        user_id: i32,
        filter: NotificationFilter,
    ) -> Result<Vec<Notification>, AppError> {
        Ok(NotificationRepository::new(self.db)
            .get_for_user(user_id, &filter)
            .await?)
    }

    pub async fn count_unread(&self, user_id: i32) -> Result<u64, AppError> {
        Ok(NotificationRepository::new(self.db)
            .count_unread(user_id)
            .await?)
    }

    /// Marks one of the user's notifications read.
    ///
    /// Notifications of other users are reported as not found.
    pub async fn mark_read(&self, user_id: i32, id: i32) -> Result<(), AppError> {
        if !NotificationRepository::new(self.db)
            .mark_read(id, user_id)
            .await?
        {
            return Err(AppError::NotFound("Notification not found".to_string()));
        }

        Ok(())
    }

    pub async fn mark_all_read(&self, user_id: i32) -> Result<u64, AppError> {
        Ok(NotificationRepository::new(self.db)
            .mark_all_read(user_id)
            .await?)
    }

    /// Sends a notification to one user.
    ///
    /// # Returns
    /// - `Ok(Notification)` - Created notification
    /// - `Err(AppError::NotFound)` - Target user does not exist
    pub async fn send(&self, params: CreateNotificationParams) -> Result<Notification, AppError> {
        if UserRepository::new(self.db)
            .find_by_id(params.user_id)
            .await?
            .is_none()
        {
            return Err(AppError::NotFound("Target user not found".to_string()));
        }

        Ok(NotificationRepository::new(self.db).create(params).await?)
    }

    /// Sends the same notification to every user.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of users notified
    pub async fn broadcast(
        &self,
        title: String,
        message: String,
        kind: NotificationKind,
    ) -> Result<u64, AppError> {
        let user_ids = UserRepository::new(self.db).get_all_ids().await?;

        let count = NotificationRepository::new(self.db)
            .create_many(
                user_ids
                    .into_iter()
                    .map(|user_id| CreateNotificationParams {
                        user_id,
                        title: title.clone(),
                        message: message.clone(),
                        kind,
                    })
                    .collect(),
            )
            .await?;

        tracing::info!("Broadcast notification \"{}\" to {} users", title, count);

        Ok(count)
    }
}
