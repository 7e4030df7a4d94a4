use entity::{document::DocumentSource, notification::NotificationKind};
use sea_orm::{ConnectionTrait, DatabaseConnection, SqlErr, TransactionTrait};

use crate::server::{
    data::{
        activity::ActivityRepository, document::DocumentRepository,
        notification::NotificationRepository, user::UserRepository,
    },
    error::AppError,
    model::{
        activity::{ActivityAction, LogActivityParams},
        document::{CreateDocumentParams, Document, DocumentFilter, DriveImportParams},
        notification::CreateNotificationParams,
        page::Page,
        user::User,
    },
};

const ENTITY_TYPE: &str = "document";

fn already_imported() -> AppError {
    AppError::BadRequest("Drive file already imported".to_string())
}

pub struct DocumentService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> DocumentService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_all(&self, filter: DocumentFilter) -> Result<Vec<Document>, AppError> {
        Ok(DocumentRepository::new(self.db).get_all(&filter).await?)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<Document>, AppError> {
        Ok(DocumentRepository::new(self.db).find_by_id(id).await?)
    }

    pub async fn get_shared_with(
        &self,
        user_id: i32,
        page: Page,
    ) -> Result<Vec<Document>, AppError> {
        Ok(DocumentRepository::new(self.db)
            .get_shared_with(user_id, page)
            .await?)
    }

    /// Registers uploaded file metadata on behalf of the actor.
    pub async fn create(
        &self,
        actor: &User,
        params: CreateDocumentParams,
    ) -> Result<Document, AppError> {
        let txn = self.db.begin().await?;

        let document = DocumentRepository::new(&txn).create(params).await?;
        log(
            &txn,
            actor,
            format!("Document Uploaded: {}", document.title),
            ActivityAction::Upload,
            &document,
        )
        .await?;

        txn.commit().await?;

        Ok(document)
    }

    /// Returns `false` if the document does not exist.
    pub async fn delete(&self, actor: &User, id: i32) -> Result<bool, AppError> {
        let txn = self.db.begin().await?;

        let Some(document) = DocumentRepository::new(&txn).delete(id).await? else {
            return Ok(false);
        };
        log(
            &txn,
            actor,
            format!("Document Deleted: {}", document.title),
            ActivityAction::Delete,
            &document,
        )
        .await?;

        txn.commit().await?;

        Ok(true)
    }

    /// Registers a Google Drive file the actor picked and optionally shares it.
    ///
    /// The file itself is never fetched; only the metadata the client sent is stored.
    ///
    /// # Returns
    /// - `Ok(Document)` - Imported document
    /// - `Err(AppError::BadRequest)` - Actor already imported this Drive file
    /// - `Err(AppError::NotFound)` - A user in `share_with` does not exist
    pub async fn import_from_drive(
        &self,
        actor: &User,
        params: DriveImportParams,
    ) -> Result<Document, AppError> {
        let txn = self.db.begin().await?;
        let repo = DocumentRepository::new(&txn);

        if repo
            .find_drive_import(actor.id, &params.drive_file_id)
            .await?
            .is_some()
        {
            return Err(already_imported());
        }

        let file_url = params.file_url();
        let created = repo
            .create(CreateDocumentParams {
                title: params.title,
                category: params.category,
                description: params.description,
                file_url,
                file_size: params.file_size,
                uploaded_by: actor.id,
                source: DocumentSource::Drive,
                drive_file_id: Some(params.drive_file_id),
                mime_type: params.mime_type,
            })
            .await;
        let document = match created {
            Ok(document) => document,
            Err(err) if matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) => {
                return Err(already_imported());
            }
            Err(err) => return Err(err.into()),
        };

        log(
            &txn,
            actor,
            format!("Document Imported from Drive: {}", document.title),
            ActivityAction::Upload,
            &document,
        )
        .await?;
        share_with_users(&txn, actor, &document, &params.share_with).await?;

        txn.commit().await?;

        Ok(document)
    }

    /// Shares a document with other users and notifies each new recipient.
    ///
    /// Only the uploader or an admin may share. Users that already have access and the
    /// uploader themself are skipped.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of users the document was newly shared with
    /// - `Err(AppError::NotFound)` - Document or a target user does not exist
    /// - `Err(AppError::Forbidden)` - Actor is neither uploader nor admin
    pub async fn share(
        &self,
        actor: &User,
        document_id: i32,
        user_ids: &[i32],
    ) -> Result<u64, AppError> {
        let txn = self.db.begin().await?;

        let document = DocumentRepository::new(&txn)
            .find_by_id(document_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Document not found".to_string()))?;

        if document.uploaded_by != actor.id && !actor.is_admin() {
            return Err(AppError::Forbidden(
                "Only the uploader or an admin can share this document".to_string(),
            ));
        }

        let count = share_with_users(&txn, actor, &document, user_ids).await?;

        txn.commit().await?;

        Ok(count)
    }
}

async fn share_with_users<C: ConnectionTrait>(
    db: &C,
    actor: &User,
    document: &Document,
    user_ids: &[i32],
) -> Result<u64, AppError> {
    let mut targets: Vec<i32> = user_ids.to_vec();
    targets.sort_unstable();
    targets.dedup();

    if targets.is_empty() {
        return Ok(0);
    }

    let missing = UserRepository::new(db).find_missing_ids(&targets).await?;
    if !missing.is_empty() {
        tracing::debug!("Share of document {} names unknown users {:?}", document.id, missing);
        return Err(AppError::NotFound("User not found".to_string()));
    }

    let documents = DocumentRepository::new(db);
    let already_shared = documents.get_share_recipients(document.id).await?;
    let recipients: Vec<i32> = targets
        .into_iter()
        .filter(|id| *id != document.uploaded_by && !already_shared.contains(id))
        .collect();

    if recipients.is_empty() {
        return Ok(0);
    }

    for user_id in &recipients {
        documents.create_share(document.id, *user_id, actor.id).await?;
    }

    NotificationRepository::new(db)
        .create_many(
            recipients
                .iter()
                .map(|user_id| CreateNotificationParams {
                    user_id: *user_id,
                    title: "Document Shared".to_string(),
                    message: format!("{} shared \"{}\" with you", actor.name, document.title),
                    kind: NotificationKind::Info,
                })
                .collect(),
        )
        .await?;

    log(
        db,
        actor,
        format!("Document Shared: {}", document.title),
        ActivityAction::Share,
        document,
    )
    .await?;

    Ok(recipients.len() as u64)
}

async fn log<C: ConnectionTrait>(
    db: &C,
    actor: &User,
    title: String,
    action: ActivityAction,
    document: &Document,
) -> Result<(), AppError> {
    ActivityRepository::new(db)
        .log(LogActivityParams {
            title,
            author: actor.name.clone(),
            action,
            entity_type: ENTITY_TYPE,
            entity_id: document.id,
        })
        .await?;

    Ok(())
}
