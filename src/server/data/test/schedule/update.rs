use super::*;

/// Tests a partial update keeps untouched fields and bumps last_updated.
///
/// Expected: Ok(Some) with the new staff count and the old department
#[tokio::test]
async fn applies_partial_update() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Schedule)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let before = Utc::now() - Duration::days(1);
    let schedule = factory::schedule::ScheduleFactory::new(db)
        .department("Maths")
        .staff_count(4)
        .last_updated(before)
        .build()
        .await?;

    let updated = ScheduleRepository::new(db)
        .update(
            schedule.id,
            UpdateScheduleParams {
                staff_count: Some(9),
                ..Default::default()
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.department, "Maths");
    assert_eq!(updated.staff_count, 9);
    assert!(updated.last_updated > before);

    Ok(())
}

/// Tests updating and deleting a missing schedule.
///
/// Expected: Ok(None) from both
#[tokio::test]
async fn returns_none_for_unknown_schedule() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Schedule)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ScheduleRepository::new(db);

    assert!(repo
        .update(42, UpdateScheduleParams::default())
        .await?
        .is_none());
    assert!(repo.delete(42).await?.is_none());

    Ok(())
}

/// Tests delete returns the removed schedule.
///
/// Expected: Ok(Some) and the row is gone
#[tokio::test]
async fn deletes_schedule() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Schedule)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let schedule = factory::create_schedule(db).await?;

    let repo = ScheduleRepository::new(db);
    let deleted = repo.delete(schedule.id).await?.unwrap();

    assert_eq!(deleted.department, schedule.department);
    assert!(repo.find_by_id(schedule.id).await?.is_none());

    Ok(())
}
