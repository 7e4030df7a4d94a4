//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique values (emails, titles) across factories.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates an uploader and a document owned by them.
///
/// # Returns
/// - `Ok((uploader, document))` - Created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_document_with_uploader(
    db: &DatabaseConnection,
) -> Result<(entity::user::Model, entity::document::Model), DbErr> {
    let uploader = crate::factory::user::create_user(db).await?;
    let document = crate::factory::document::create_document(db, uploader.id).await?;

    Ok((uploader, document))
}

/// Creates an admin and a two option poll ("Yes" = 1, "No" = 2) created by them.
///
/// # Returns
/// - `Ok((admin, poll))` - Created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_poll_with_creator(
    db: &DatabaseConnection,
) -> Result<(entity::user::Model, entity::poll::Model), DbErr> {
    let admin = crate::factory::user::create_admin(db).await?;
    let poll = crate::factory::poll::create_poll(db, admin.id).await?;

    Ok((admin, poll))
}
