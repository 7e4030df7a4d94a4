use super::*;

/// Tests marking another user's notification is refused.
///
/// Expected: Ok(false) and the notification stays unread
#[tokio::test]
async fn ignores_other_users_notification() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::Notification)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let intruder = factory::create_user(db).await?;
    let notification = factory::create_notification(db, owner.id).await?;

    let repo = NotificationRepository::new(db);

    assert!(!repo.mark_read(notification.id, intruder.id).await?);
    assert_eq!(repo.count_unread(owner.id).await?, 1);

    Ok(())
}

/// Tests marking the owner's notification read.
///
/// Expected: Ok(true) and no unread notifications left
#[tokio::test]
async fn marks_own_notification() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::Notification)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let notification = factory::create_notification(db, owner.id).await?;

    let repo = NotificationRepository::new(db);

    assert!(repo.mark_read(notification.id, owner.id).await?);
    assert_eq!(repo.count_unread(owner.id).await?, 0);

    Ok(())
}

/// Tests bulk marking only touches the user's unread notifications.
///
/// Expected: Ok(2) and the other user's notification stays unread
#[tokio::test]
async fn marks_all_unread_for_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::Notification)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;
    factory::create_notification(db, user.id).await?;
    factory::create_notification(db, user.id).await?;
    factory::notification::NotificationFactory::new(db, user.id)
        .read()
        .build()
        .await?;
    factory::create_notification(db, other.id).await?;

    let repo = NotificationRepository::new(db);

    assert_eq!(repo.mark_all_read(user.id).await?, 2);
    assert_eq!(repo.count_unread(user.id).await?, 0);
    assert_eq!(repo.count_unread(other.id).await?, 1);

    Ok(())
}
