use super::*;

/// Tests bulk insert returns the number of rows written.
///
/// Expected: Ok(2) and each user has one unread notification
#[tokio::test]
async fn inserts_one_per_params() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::Notification)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::create_user(db).await?;
    let second = factory::create_user(db).await?;

    let repo = NotificationRepository::new(db);
    let count = repo
        .create_many(vec![params(first.id, "Hi"), params(second.id, "Hi")])
        .await?;

    assert_eq!(count, 2);
    assert_eq!(repo.count_unread(first.id).await?, 1);
    assert_eq!(repo.count_unread(second.id).await?, 1);

    Ok(())
}

/// Tests an empty batch writes nothing.
///
/// Expected: Ok(0)
#[tokio::test]
async fn empty_batch_is_noop() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::Notification)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let count = NotificationRepository::new(db).create_many(Vec::new()).await?;

    assert_eq!(count, 0);

    Ok(())
}
