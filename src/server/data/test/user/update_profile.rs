use super::*;

/// Tests only the provided fields change.
///
/// Expected: Ok(Some) with new department and the original name
#[tokio::test]
async fn updates_only_provided_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::UserFactory::new(db)
        .name("Original")
        .department("Arts")
        .build()
        .await?;

    let updated = UserRepository::new(db)
        .update_profile(
            user.id,
            UpdateProfileParams {
                name: None,
                department: Some("Music".to_string()),
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.name, "Original");
    assert_eq!(updated.department.as_deref(), Some("Music"));

    Ok(())
}

/// Tests updating a user that does not exist.
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
        .update_profile(9999, UpdateProfileParams::default())
        .await?;

    assert!(result.is_none());

    Ok(())
}
