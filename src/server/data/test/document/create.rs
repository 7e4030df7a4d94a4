use super::*;

/// Tests a Drive import is found again by uploader and Drive file id.
///
/// Expected: Ok(Some) for the uploader, Ok(None) for anyone else
#[tokio::test]
async fn finds_drive_import_per_uploader() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_document_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let uploader = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;

    let repo = DocumentRepository::new(db);
    let document = repo
        .create(CreateDocumentParams {
            title: "Timetable".to_string(),
            category: "Exams".to_string(),
            description: None,
            file_url: "https://drive.google.com/file/d/abc/view".to_string(),
            file_size: 0,
            uploaded_by: uploader.id,
            source: DocumentSource::Drive,
            drive_file_id: Some("abc".to_string()),
            mime_type: Some("application/pdf".to_string()),
        })
        .await?;

    let found = repo.find_drive_import(uploader.id, "abc").await?;
    assert_eq!(found.map(|d| d.id), Some(document.id));
    assert!(repo.find_drive_import(other.id, "abc").await?.is_none());

    Ok(())
}

/// Tests the store refuses a second document for the same uploader and Drive file.
///
/// Expected: UniqueConstraintViolation for the duplicate; plain uploads and other
/// uploaders are unaffected
#[tokio::test]
async fn rejects_duplicate_drive_file_per_uploader() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_document_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let uploader = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;
    factory::document::DocumentFactory::new(db, uploader.id).build().await?;
    factory::document::DocumentFactory::new(db, uploader.id).build().await?;
    factory::document::DocumentFactory::new(db, uploader.id)
        .drive("dup")
        .build()
        .await?;

    let repo = DocumentRepository::new(db);
    let result = repo
        .create(CreateDocumentParams {
            title: "Again".to_string(),
            category: "General".to_string(),
            description: None,
            file_url: "https://drive.google.com/file/d/dup/view".to_string(),
            file_size: 0,
            uploaded_by: uploader.id,
            source: DocumentSource::Drive,
            drive_file_id: Some("dup".to_string()),
            mime_type: None,
        })
        .await;

    let err = result.expect_err("duplicate Drive import must fail");
    assert!(matches!(
        err.sql_err(),
        Some(SqlErr::UniqueConstraintViolation(_))
    ));

    factory::document::DocumentFactory::new(db, other.id)
        .drive("dup")
        .build()
        .await?;
    assert_eq!(repo.count().await?, 4);

    Ok(())
}

/// Tests deleting a document removes its shares.
///
/// Expected: Ok(Some) and no share rows remain
#[tokio::test]
async fn delete_cascades_to_shares() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_document_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (uploader, document) = factory::helpers::create_document_with_uploader(db).await?;
    let reader = factory::create_user(db).await?;
    factory::create_share(db, document.id, reader.id, uploader.id).await?;

    let repo = DocumentRepository::new(db);
    let deleted = repo.delete(document.id).await?;

    assert_eq!(deleted.map(|d| d.id), Some(document.id));
    assert_eq!(repo.count().await?, 0);
    let shares = entity::prelude::DocumentShare::find().all(db).await?;
    assert!(shares.is_empty());

    Ok(())
}

/// Tests share recipients are listed per document.
///
/// Expected: Ok with the single recipient
#[tokio::test]
async fn lists_share_recipients() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_document_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (uploader, document) = factory::helpers::create_document_with_uploader(db).await?;
    let reader = factory::create_user(db).await?;

    let repo = DocumentRepository::new(db);
    repo.create_share(document.id, reader.id, uploader.id).await?;

    assert_eq!(repo.get_share_recipients(document.id).await?, vec![reader.id]);

    Ok(())
}
