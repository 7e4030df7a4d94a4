use super::*;

/// Tests only ids without a user row are reported.
///
/// Expected: Ok with just the unknown id
#[tokio::test]
async fn returns_unknown_ids() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;

    let missing = UserRepository::new(db)
        .find_missing_ids(&[user.id, 9999])
        .await?;

    assert_eq!(missing, vec![9999]);

    Ok(())
}

/// Tests an empty id list short-circuits.
///
/// Expected: Ok with empty vec
#[tokio::test]
async fn empty_input_returns_empty() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let missing = UserRepository::new(db).find_missing_ids(&[]).await?;

    assert!(missing.is_empty());

    Ok(())
}
