use super::*;

/// Tests users come back ordered by id and paginated.
///
/// Expected: Ok with the second and third user for skip 1, limit 2
#[tokio::test]
async fn paginates_in_id_order() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let mut ids = Vec::new();
    for _ in 0..4 {
        ids.push(factory::user::create_user(db).await?.id);
    }

    let users = UserRepository::new(db)
        .get_all(&UserFilter {
            department: None,
            page: Page::new(1, 2),
        })
        .await?;

    let result: Vec<i32> = users.iter().map(|u| u.id).collect();
    assert_eq!(result, ids[1..3].to_vec());

    Ok(())
}

/// Tests filtering by department is an exact match.
///
/// Expected: Ok with only the Science user
#[tokio::test]
async fn filters_by_department() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let science = factory::user::UserFactory::new(db)
        .department("Science")
        .build()
        .await?;
    factory::user::UserFactory::new(db)
        .department("Science Fiction Club")
        .build()
        .await?;
    factory::user::create_user(db).await?;

    let users = UserRepository::new(db)
        .get_all(&UserFilter {
            department: Some("Science".to_string()),
            page: Page::default(),
        })
        .await?;

    assert_eq!(users.len(), 1);
    assert_eq!(users[0].id, science.id);

    Ok(())
}
