use super::*;

/// Tests the status filter selects open or closed polls.
///
/// Expected: Ok with one poll for each of active and completed, two for all
#[tokio::test]
async fn filters_by_status() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_poll_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let admin = factory::create_admin(db).await?;
    let open = factory::create_poll(db, admin.id).await?;
    let closed = factory::poll::PollFactory::new(db, admin.id)
        .closed()
        .build()
        .await?;

    let repo = PollRepository::new(db);

    let active = repo.get_all_with_results(PollStatusFilter::Active).await?;
    assert_eq!(active.len(), 1);
    assert_eq!(active[0].poll.id, open.id);

    let completed = repo
        .get_all_with_results(PollStatusFilter::Completed)
        .await?;
    assert_eq!(completed.len(), 1);
    assert_eq!(completed[0].poll.id, closed.id);

    assert_eq!(repo.get_all_with_results(PollStatusFilter::All).await?.len(), 2);

    Ok(())
}

/// Tests polls are newest first and each carries its own tally.
///
/// Expected: Ok with the newer poll first and votes only on the older one
#[tokio::test]
async fn orders_newest_first_with_tallies() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_poll_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let admin = factory::create_admin(db).await?;
    let now = Utc::now();
    let older = factory::poll::PollFactory::new(db, admin.id)
        .created_at(now - Duration::days(1))
        .build()
        .await?;
    let newer = factory::poll::PollFactory::new(db, admin.id)
        .created_at(now)
        .build()
        .await?;
    factory::create_vote(db, older.id, admin.id, 2).await?;

    let polls = PollRepository::new(db)
        .get_all_with_results(PollStatusFilter::All)
        .await?;

    assert_eq!(polls[0].poll.id, newer.id);
    assert_eq!(polls[0].total_votes(), 0);
    assert_eq!(polls[1].poll.id, older.id);
    assert_eq!(polls[1].votes.get(&2), Some(&1));

    Ok(())
}
