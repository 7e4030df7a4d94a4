use super::*;

/// Tests only the user's notifications are listed, newest first.
///
/// Expected: Ok with the user's two notifications in descending order
#[tokio::test]
async fn lists_own_notifications_newest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::Notification)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;
    let now = Utc::now();
    factory::notification::NotificationFactory::new(db, user.id)
        .title("Older")
        .created_at(now - Duration::hours(2))
        .build()
        .await?;
    factory::notification::NotificationFactory::new(db, user.id)
        .title("Newer")
        .created_at(now)
        .build()
        .await?;
    factory::create_notification(db, other.id).await?;

    let notifications = NotificationRepository::new(db)
        .get_for_user(user.id, &NotificationFilter::default())
        .await?;

    let titles: Vec<&str> = notifications.iter().map(|n| n.title.as_str()).collect();
    assert_eq!(titles, vec!["Newer", "Older"]);

    Ok(())
}

/// Tests the unread filter.
///
/// Expected: Ok with only the unread notification
#[tokio::test]
async fn filters_unread_only() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::Notification)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    factory::notification::NotificationFactory::new(db, user.id)
        .read()
        .build()
        .await?;
    let unread = factory::create_notification(db, user.id).await?;

    let notifications = NotificationRepository::new(db)
        .get_for_user(
            user.id,
            &NotificationFilter {
                unread_only: true,
                page: Page::default(),
            },
        )
        .await?;

    assert_eq!(notifications.len(), 1);
    assert_eq!(notifications[0].id, unread.id);

    Ok(())
}

/// Tests counting notifications created within a window.
///
/// Expected: Ok(1) for the last day
#[tokio::test]
async fn counts_created_since() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::Notification)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let now = Utc::now();
    factory::notification::NotificationFactory::new(db, user.id)
        .created_at(now - Duration::days(45))
        .build()
        .await?;
    factory::create_notification(db, user.id).await?;

    let count = NotificationRepository::new(db)
        .count_created_since(now - Duration::days(1))
        .await?;

    assert_eq!(count, 1);

    Ok(())
}
