use super::*;

/// Tests creating a user stores every field.
///
/// Expected: Ok with the user findable by email
#[tokio::test]
async fn creates_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo
        .create(CreateUserParams {
            email: "teacher@school.test".to_string(),
            name: "Grace".to_string(),
            hashed_password: Some("hash".to_string()),
            role: UserRole::Teacher,
            avatar: None,
            department: Some("Science".to_string()),
            google_id: None,
        })
        .await?;

    assert_eq!(user.role, UserRole::Teacher);
    assert_eq!(user.department.as_deref(), Some("Science"));

    let found = repo.find_by_email("teacher@school.test").await?;
    assert_eq!(found.map(|u| u.id), Some(user.id));

    Ok(())
}

/// Tests email uniqueness is enforced by the table.
///
/// Expected: Err(DbErr) on the second insert
#[tokio::test]
async fn rejects_duplicate_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::UserFactory::new(db)
        .email("taken@school.test")
        .build()
        .await?;

    let result = UserRepository::new(db)
        .create(CreateUserParams {
            email: "taken@school.test".to_string(),
            name: "Other".to_string(),
            hashed_password: None,
            role: UserRole::Student,
            avatar: None,
            department: None,
            google_id: None,
        })
        .await;

    assert!(result.is_err());

    Ok(())
}

/// Tests counting users created on or after a given instant.
///
/// Expected: Ok(1) with one old and one new user
#[tokio::test]
async fn counts_users_created_since() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let now = Utc::now();
    factory::user::UserFactory::new(db)
        .created_at(now - Duration::days(60))
        .build()
        .await?;
    factory::user::create_user(db).await?;

    let repo = UserRepository::new(db);

    assert_eq!(repo.count().await?, 2);
    assert_eq!(repo.count_created_since(now - Duration::days(1)).await?, 1);

    Ok(())
}
