use chrono::Utc;
use entity::schedule::ScheduleStatus;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    ModelTrait, PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::{
    data::contains_ignore_case,
    model::schedule::{CreateScheduleParams, Schedule, ScheduleFilter, UpdateScheduleParams},
};

pub struct ScheduleRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ScheduleRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: CreateScheduleParams) -> Result<Schedule, DbErr> {
        let now = Utc::now();
        let schedule = entity::schedule::ActiveModel {
            department: ActiveValue::Set(params.department),
            class_count: ActiveValue::Set(params.class_count),
            staff_count: ActiveValue::Set(params.staff_count),
            status: ActiveValue::Set(params.status),
            created_at: ActiveValue::Set(now),
            last_updated: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Schedule::from_entity(schedule))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Schedule>, DbErr> {
        let schedule = entity::prelude::Schedule::find_by_id(id).one(self.db).await?;

        Ok(schedule.map(Schedule::from_entity))
    }

    /// Schedules matching the filter, most recently updated first.
    pub async fn get_all(&self, filter: &ScheduleFilter) -> Result<Vec<Schedule>, DbErr> {
        let mut query = entity::prelude::Schedule::find();

        if let Some(search) = &filter.search {
            query = query.filter(contains_ignore_case(
                (entity::schedule::Entity, entity::schedule::Column::Department),
                search,
            ));
        }
        if let Some(status) = filter.status {
            query = query.filter(entity::schedule::Column::Status.eq(status));
        }

        let schedules = query
            .order_by_desc(entity::schedule::Column::LastUpdated)
            .order_by_desc(entity::schedule::Column::Id)
            .all(self.db)
            .await?;

        Ok(schedules.into_iter().map(Schedule::from_entity).collect())
    }

    /// Applies the provided fields and bumps `last_updated`.
    ///
    /// # Returns
    /// - `Ok(Some(Schedule))` - Updated schedule
    /// - `Ok(None)` - No schedule with that id
    pub async fn update(
        &self,
        id: i32,
        params: UpdateScheduleParams,
    ) -> Result<Option<Schedule>, DbErr> {
        let Some(schedule) = entity::prelude::Schedule::find_by_id(id).one(self.db).await?
        else {
            return Ok(None);
        };

        let mut active: entity::schedule::ActiveModel = schedule.into();
        if let Some(department) = params.department {
            active.department = ActiveValue::Set(department);
        }
        if let Some(class_count) = params.class_count {
            active.class_count = ActiveValue::Set(class_count);
        }
        if let Some(staff_count) = params.staff_count {
            active.staff_count = ActiveValue::Set(staff_count);
        }
        if let Some(status) = params.status {
            active.status = ActiveValue::Set(status);
        }
        active.last_updated = ActiveValue::Set(Utc::now());

        let schedule = active.update(self.db).await?;

        Ok(Some(Schedule::from_entity(schedule)))
    }

    /// Deletes the schedule and returns it as it was.
    ///
    /// # Returns
    /// - `Ok(Some(Schedule))` - Deleted schedule
    /// - `Ok(None)` - No schedule with that id
    pub async fn delete(&self, id: i32) -> Result<Option<Schedule>, DbErr> {
        let Some(schedule) = entity::prelude::Schedule::find_by_id(id).one(self.db).await?
        else {
            return Ok(None);
        };

        let deleted = Schedule::from_entity(schedule.clone());
        schedule.delete(self.db).await?;

        Ok(Some(deleted))
    }

    pub async fn count_with_status(&self, status: ScheduleStatus) -> Result<u64, DbErr> {
        entity::prelude::Schedule::find()
            .filter(entity::schedule::Column::Status.eq(status))
            .count(self.db)
            .await
    }
}
