use super::*;

/// Tests schedules are ordered by last update, newest first.
///
/// Expected: Ok with the recently updated schedule first
#[tokio::test]
async fn orders_by_last_updated_desc() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Schedule)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let now = Utc::now();
    let stale = factory::schedule::ScheduleFactory::new(db)
        .last_updated(now - Duration::days(2))
        .build()
        .await?;
    let fresh = factory::schedule::ScheduleFactory::new(db)
        .last_updated(now)
        .build()
        .await?;

    let schedules = ScheduleRepository::new(db)
        .get_all(&ScheduleFilter::default())
        .await?;

    let ids: Vec<i32> = schedules.iter().map(|s| s.id).collect();
    assert_eq!(ids, vec![fresh.id, stale.id]);

    Ok(())
}

/// Tests search matches any part of the department regardless of case.
///
/// Expected: Ok with only "Computer Science"
#[tokio::test]
async fn searches_department_case_insensitively() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Schedule)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::schedule::ScheduleFactory::new(db)
        .department("Computer Science")
        .build()
        .await?;
    factory::schedule::ScheduleFactory::new(db)
        .department("History")
        .build()
        .await?;

    let schedules = ScheduleRepository::new(db)
        .get_all(&ScheduleFilter {
            search: Some("SCIENCE".to_string()),
            status: None,
        })
        .await?;

    assert_eq!(schedules.len(), 1);
    assert_eq!(schedules[0].department, "Computer Science");

    Ok(())
}

/// Tests the status filter and status counting agree.
///
/// Expected: Ok with one draft returned and two active counted
#[tokio::test]
async fn filters_and_counts_by_status() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Schedule)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_schedule(db).await?;
    factory::create_schedule(db).await?;
    let draft = factory::schedule::ScheduleFactory::new(db)
        .status(ScheduleStatus::Draft)
        .build()
        .await?;

    let repo = ScheduleRepository::new(db);
    let drafts = repo
        .get_all(&ScheduleFilter {
            search: None,
            status: Some(ScheduleStatus::Draft),
        })
        .await?;

    assert_eq!(drafts.len(), 1);
    assert_eq!(drafts[0].id, draft.id);
    assert_eq!(repo.count_with_status(ScheduleStatus::Active).await?, 2);

    Ok(())
}
