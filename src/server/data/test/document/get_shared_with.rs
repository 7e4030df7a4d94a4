use super::*;

/// Tests only documents shared with the user are returned.
///
/// Expected: Ok with the shared document only
#[tokio::test]
async fn returns_documents_shared_with_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_document_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (uploader, shared) = factory::helpers::create_document_with_uploader(db).await?;
    factory::create_document(db, uploader.id).await?;
    let reader = factory::create_user(db).await?;
    let bystander = factory::create_user(db).await?;
    factory::create_share(db, shared.id, reader.id, uploader.id).await?;

    let repo = DocumentRepository::new(db);
    let documents = repo.get_shared_with(reader.id, Page::default()).await?;

    assert_eq!(documents.len(), 1);
    assert_eq!(documents[0].id, shared.id);
    assert!(repo
        .get_shared_with(bystander.id, Page::default())
        .await?
        .is_empty());

    Ok(())
}
