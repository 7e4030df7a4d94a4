use super::*;

/// Tests documents are newest first and paginated.
///
/// Expected: Ok with the middle document for skip 1, limit 1
#[tokio::test]
async fn paginates_newest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_document_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let now = Utc::now();
    for (title, age) in [("Old", 3), ("Middle", 2), ("New", 1)] {
        factory::document::DocumentFactory::new(db, user.id)
            .title(title)
            .created_at(now - Duration::hours(age))
            .build()
            .await?;
    }

    let documents = DocumentRepository::new(db)
        .get_all(&DocumentFilter {
            page: Page::new(1, 1),
            ..Default::default()
        })
        .await?;

    assert_eq!(documents.len(), 1);
    assert_eq!(documents[0].title, "Middle");

    Ok(())
}

/// Tests category is exact and search is a case-insensitive title match.
///
/// Expected: Ok with only the matching exam document
#[tokio::test]
async fn filters_by_category_and_title() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_document_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let wanted = factory::document::DocumentFactory::new(db, user.id)
        .title("Final Exam Timetable")
        .category("Exams")
        .build()
        .await?;
    factory::document::DocumentFactory::new(db, user.id)
        .title("Exam Policy")
        .category("Policies")
        .build()
        .await?;
    factory::document::DocumentFactory::new(db, user.id)
        .title("Seating Plan")
        .category("Exams")
        .build()
        .await?;

    let documents = DocumentRepository::new(db)
        .get_all(&DocumentFilter {
            category: Some("Exams".to_string()),
            search: Some("exam".to_string()),
            page: Page::default(),
        })
        .await?;

    assert_eq!(documents.len(), 1);
    assert_eq!(documents[0].id, wanted.id);

    Ok(())
}
