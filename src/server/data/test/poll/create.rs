use super::*;

/// Tests a new poll stores its options and starts open.
///
/// Expected: Ok with both options and is_active true
#[tokio::test]
async fn creates_open_poll_with_options() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_poll_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let admin = factory::create_admin(db).await?;
    let expires_at = Utc::now() + Duration::days(7);

    let poll = PollRepository::new(db)
        .create(CreatePollParams {
            title: "Sports day".to_string(),
            description: Some("Pick a date".to_string()),
            options: vec![
                PollOption {
                    id: 1,
                    text: "Friday".to_string(),
                },
                PollOption {
                    id: 2,
                    text: "Saturday".to_string(),
                },
            ],
            expires_at: Some(expires_at),
            created_by: admin.id,
        })
        .await?;

    assert!(poll.is_active);
    assert_eq!(poll.options.len(), 2);
    assert!(poll.has_option(2));
    assert!(!poll.has_option(3));
    assert_eq!(poll.created_by, admin.id);

    Ok(())
}

/// Tests closing flips is_active and vote lookups see existing votes.
///
/// Expected: Ok(Some) with is_active false, has_voted true for the voter
#[tokio::test]
async fn closes_poll_and_tracks_votes() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_poll_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (admin, poll) = factory::helpers::create_poll_with_creator(db).await?;
    let voter = factory::create_user(db).await?;

    let repo = PollRepository::new(db);
    repo.create_vote(poll.id, voter.id, 1).await?;

    assert!(repo.has_voted(poll.id, voter.id).await?);
    assert!(!repo.has_voted(poll.id, admin.id).await?);

    let closed = repo.close(poll.id).await?.unwrap();
    assert!(!closed.is_active);
    assert!(repo.close(9999).await?.is_none());

    Ok(())
}
