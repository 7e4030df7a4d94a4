use chrono::{DateTime, Datelike, Duration, NaiveDate, Utc};
use entity::schedule::ScheduleStatus;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::{
        activity::ActivityRepository, document::DocumentRepository,
        notification::NotificationRepository, schedule::ScheduleRepository, user::UserRepository,
    },
    error::AppError,
    model::{activity::Activity, dashboard::DashboardStats},
};

/// Window `notificationsSent` counts over.
const NOTIFICATION_WINDOW_DAYS: i64 = 30;

pub struct DashboardService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> DashboardService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_stats(&self, now: DateTime<Utc>) -> Result<DashboardStats, AppError> {
        let users = UserRepository::new(self.db);

        Ok(DashboardStats {
            total_staff: users.count().await?,
            new_staff_this_month: users.count_created_since(start_of_month(now)).await?,
            active_schedules: ScheduleRepository::new(self.db)
                .count_with_status(ScheduleStatus::Active)
                .await?,
            notifications_sent: NotificationRepository::new(self.db)
                .count_created_since(now - Duration::days(NOTIFICATION_WINDOW_DAYS))
                .await?,
            total_documents: DocumentRepository::new(self.db).count().await?,
        })
    }

    pub async fn get_recent_activity(&self, limit: u64) -> Result<Vec<Activity>, AppError> {
        Ok(ActivityRepository::new(self.db).get_recent(limit).await?)
    }
}

/// Midnight UTC on the first day of `now`'s month.
pub fn start_of_month(now: DateTime<Utc>) -> DateTime<Utc> {
    NaiveDate::from_ymd_opt(now.year(), now.month(), 1)
        .and_then(|day| day.and_hms_opt(0, 0, 0))
        .map(|midnight| midnight.and_utc())
        .unwrap_or(now)
}
