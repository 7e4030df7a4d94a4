use super::*;

/// Tests votes are tallied per option.
///
/// Expected: Ok(Some) with 2 votes for option 1 and 1 for option 2
#[tokio::test]
async fn tallies_votes_per_option() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_poll_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_admin, poll) = factory::helpers::create_poll_with_creator(db).await?;
    for option_id in [1, 1, 2] {
        let voter = factory::create_user(db).await?;
        factory::create_vote(db, poll.id, voter.id, option_id).await?;
    }

    let result = PollRepository::new(db)
        .find_with_results(poll.id)
        .await?
        .unwrap();

    assert_eq!(result.votes.get(&1), Some(&2));
    assert_eq!(result.votes.get(&2), Some(&1));
    assert_eq!(result.total_votes(), 3);

    Ok(())
}

/// Tests a missing poll.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_poll() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_poll_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = PollRepository::new(db).find_with_results(9999).await?;

    assert!(result.is_none());

    Ok(())
}
