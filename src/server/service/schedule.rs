use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{activity::ActivityRepository, schedule::ScheduleRepository},
    error::AppError,
    model::{
        activity::{ActivityAction, LogActivityParams},
        schedule::{CreateScheduleParams, Schedule, ScheduleFilter, UpdateScheduleParams},
        user::User,
    },
};

const ENTITY_TYPE: &str = "schedule";

pub struct ScheduleService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ScheduleService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_all(&self, filter: ScheduleFilter) -> Result<Vec<Schedule>, AppError> {
        Ok(ScheduleRepository::new(self.db).get_all(&filter).await?)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<Schedule>, AppError> {
        Ok(ScheduleRepository::new(self.db).find_by_id(id).await?)
    }

    pub async fn create(
        &self,
        actor: &User,
        params: CreateScheduleParams,
    ) -> Result<Schedule, AppError> {
        let txn = self.db.begin().await?;

        let schedule = ScheduleRepository::new(&txn).create(params).await?;
        log(&txn, actor, "Schedule Created", ActivityAction::Create, &schedule).await?;

        txn.commit().await?;

        Ok(schedule)
    }

    /// Returns `None` if the schedule does not exist.
    pub async fn update(
        &self,
        actor: &User,
        id: i32,
        params: UpdateScheduleParams,
    ) -> Result<Option<Schedule>, AppError> {
        let txn = self.db.begin().await?;

        let Some(schedule) = ScheduleRepository::new(&txn).update(id, params).await? else {
            return Ok(None);
        };
        log(&txn, actor, "Schedule Updated", ActivityAction::Update, &schedule).await?;

        txn.commit().await?;

        Ok(Some(schedule))
    }

    /// Returns `false` if the schedule does not exist.
    pub async fn delete(&self, actor: &User, id: i32) -> Result<bool, AppError> {
        let txn = self.db.begin().await?;

        let Some(schedule) = ScheduleRepository::new(&txn).delete(id).await? else {
            return Ok(false);
        };
        log(&txn, actor, "Schedule Deleted", ActivityAction::Delete, &schedule).await?;

        txn.commit().await?;

        Ok(true)
    }
}

async fn log<C: sea_orm::ConnectionTrait>(
    db: &C,
    actor: &User,
    verb: &str,
    action: ActivityAction,
    schedule: &Schedule,
) -> Result<(), AppError> {
    ActivityRepository::new(db)
        .log(LogActivityParams {
            title: format!("{}: {}", verb, schedule.department),
            author: actor.department_or_name().to_string(),
            action,
            entity_type: ENTITY_TYPE,
            entity_id: schedule.id,
        })
        .await?;

    Ok(())
}
