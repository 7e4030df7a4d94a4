use entity::schedule::ScheduleStatus;
use sea_orm::{EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

use super::to_domain;
use crate::server::{
    error::AppError,
    model::schedule::{CreateScheduleParams, UpdateScheduleParams},
    service::schedule::ScheduleService,
};

/// Tests creating a schedule logs activity under the actor's department.
///
/// Expected: Ok(Schedule) and one "Schedule Created" entry authored by "Administration"
#[tokio::test]
async fn create_logs_activity() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::Schedule)
        .with_table(entity::prelude::Activity)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let admin = factory::user::UserFactory::new(db)
        .admin()
        .department("Administration")
        .build()
        .await?;

    let schedule = ScheduleService::new(db)
        .create(
            &to_domain(admin),
            CreateScheduleParams {
                department: "Science".to_string(),
                class_count: 12,
                staff_count: 5,
                status: ScheduleStatus::Draft,
            },
        )
        .await?;

    assert_eq!(schedule.status, ScheduleStatus::Draft);

    let activity = entity::prelude::Activity::find().all(db).await?;
    assert_eq!(activity.len(), 1);
    assert_eq!(activity[0].title, "Schedule Created: Science");
    assert_eq!(activity[0].author, "Administration");
    assert_eq!(activity[0].action_type, "create");
    assert_eq!(activity[0].entity_id, Some(schedule.id));

    Ok(())
}

/// Tests activity falls back to the actor's name without a department.
///
/// Expected: Ok(Some) and a "Schedule Updated" entry authored by the name
#[tokio::test]
async fn update_logs_actor_name_without_department() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::Schedule)
        .with_table(entity::prelude::Activity)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let admin = factory::user::UserFactory::new(db)
        .admin()
        .name("Principal Skinner")
        .build()
        .await?;
    let schedule = factory::schedule::ScheduleFactory::new(db)
        .department("History")
        .build()
        .await?;

    let updated = ScheduleService::new(db)
        .update(
            &to_domain(admin),
            schedule.id,
            UpdateScheduleParams {
                class_count: Some(3),
                ..Default::default()
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.class_count, 3);

    let activity = entity::prelude::Activity::find().all(db).await?;
    assert_eq!(activity[0].title, "Schedule Updated: History");
    assert_eq!(activity[0].author, "Principal Skinner");

    Ok(())
}

/// Tests a missing schedule writes no activity.
///
/// Expected: Ok(false) from delete, Ok(None) from update, no activity rows
#[tokio::test]
async fn missing_schedule_logs_nothing() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::Schedule)
        .with_table(entity::prelude::Activity)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let admin = to_domain(factory::create_admin(db).await?);
    let service = ScheduleService::new(db);

    assert!(!service.delete(&admin, 404).await?);
    assert!(service
        .update(&admin, 404, UpdateScheduleParams::default())
        .await?
        .is_none());
    assert_eq!(entity::prelude::Activity::find().count(db).await?, 0);

    Ok(())
}
