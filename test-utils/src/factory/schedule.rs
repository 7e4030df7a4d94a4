//! Schedule factory.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Utc};
use entity::schedule::ScheduleStatus;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

pub struct ScheduleFactory<'a> {
    db: &'a DatabaseConnection,
    department: String,
    class_count: i32,
    staff_count: i32,
    status: ScheduleStatus,
    last_updated: DateTime<Utc>,
}

impl<'a> ScheduleFactory<'a> {
    /// Defaults: department `"Department {id}"`, zero counts, `Active`, updated now.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            department: format!("Department {}", next_id()),
            class_count: 0,
            staff_count: 0,
            status: ScheduleStatus::Active,
            last_updated: Utc::now(),
        }
    }

    pub fn department(mut self, department: impl Into<String>) -> Self {
        self.department = department.into();
        self
    }

    pub fn class_count(mut self, class_count: i32) -> Self {
        self.class_count = class_count;
        self
    }

    pub fn staff_count(mut self, staff_count: i32) -> Self {
        self.staff_count = staff_count;
        self
    }

    pub fn status(mut self, status: ScheduleStatus) -> Self {
        self.status = status;
        self
    }

    pub fn last_updated(mut self, last_updated: DateTime<Utc>) -> Self {
        self.last_updated = last_updated;
        self
    }

    pub async fn build(self) -> Result<entity::schedule::Model, DbErr> {
        entity::schedule::ActiveModel {
            department: ActiveValue::Set(self.department),
            class_count: ActiveValue::Set(self.class_count),
            staff_count: ActiveValue::Set(self.staff_count),
            status: ActiveValue::Set(self.status),
            created_at: ActiveValue::Set(self.last_updated),
            last_updated: ActiveValue::Set(self.last_updated),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

pub async fn create_schedule(db: &DatabaseConnection) -> Result<entity::schedule::Model, DbErr> {
    ScheduleFactory::new(db).build().await
}
