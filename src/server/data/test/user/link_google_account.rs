use super::*;

/// Tests linking sets the Google id and fills a missing avatar.
///
/// Expected: Ok(Some) with google_id and avatar set
#[tokio::test]
async fn links_and_fills_missing_avatar() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;

    let repo = UserRepository::new(db);
    let linked = repo
        .link_google_account(
            user.id,
            "google-123".to_string(),
            Some("https://example.com/a.png".to_string()),
        )
        .await?
        .unwrap();

    assert_eq!(linked.google_id.as_deref(), Some("google-123"));
    assert_eq!(linked.avatar.as_deref(), Some("https://example.com/a.png"));

    let found = repo.find_by_google_id("google-123").await?;
    assert_eq!(found.map(|u| u.id), Some(user.id));

    Ok(())
}

/// Tests an existing avatar is kept when linking.
///
/// Expected: Ok(Some) with the original avatar
#[tokio::test]
async fn keeps_existing_avatar() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::UserFactory::new(db)
        .avatar("https://example.com/mine.png")
        .build()
        .await?;

    let linked = UserRepository::new(db)
        .link_google_account(
            user.id,
            "google-456".to_string(),
            Some("https://example.com/google.png".to_string()),
        )
        .await?
        .unwrap();

    assert_eq!(linked.avatar.as_deref(), Some("https://example.com/mine.png"));

    Ok(())
}

/// Tests linking an unknown user.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = UserRepository::new(db)
        .link_google_account(9999, "google-789".to_string(), None)
        .await?;

    assert!(result.is_none());

    Ok(())
}
