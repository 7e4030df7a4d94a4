use entity::prelude::*;
use sea_orm::{
    sea_query::{Index, IndexCreateStatement, TableCreateStatement},
    EntityTrait, Schema,
};

use crate::{context::TestContext, error::TestError};

/// Builder for test contexts backed by an in-memory SQLite database.
///
/// Add the entity tables a test needs, then call `build()`.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
/// use entity::prelude::{User, Document};
///
/// let test = TestBuilder::new()
///     .with_table(User)
///     .with_table(Document)
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    /// CREATE TABLE statements, executed in insertion order during `build()`.
    tables: Vec<TableCreateStatement>,
    /// CREATE INDEX statements, executed after every table exists.
    indexes: Vec<IndexCreateStatement>,
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestBuilder {
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            indexes: Vec::new(),
        }
    }

    /// Adds an entity table to the schema.
    ///
    /// Tables with foreign keys must be added after the tables they reference.
    ///
    /// # Arguments
    /// - `entity` - SeaORM entity to generate the table from
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Adds an index the entity definitions cannot express, such as a composite unique key.
    pub fn with_index(mut self, index: IndexCreateStatement) -> Self {
        self.indexes.push(index);
        self
    }

    /// Adds the tables needed by the document endpoints: User, Document, DocumentShare,
    /// Notification and Activity.
    pub fn with_document_tables(self) -> Self {
        self.with_table(User)
            .with_table(Document)
            .with_table(DocumentShare)
            .with_table(Notification)
            .with_table(Activity)
            .with_index(drive_import_index())
    }

    /// Adds the tables needed by the poll endpoints: User, Poll, PollVote and Activity.
    pub fn with_poll_tables(self) -> Self {
        self.with_table(User)
            .with_table(Poll)
            .with_table(PollVote)
            .with_table(Activity)
            .with_index(poll_vote_index())
    }

    /// Adds every table in dependency order.
    ///
    /// Used by router-level tests that exercise several resources at once.
    pub fn with_all_tables(self) -> Self {
        self.with_table(User)
            .with_table(Schedule)
            .with_table(Document)
            .with_table(DocumentShare)
            .with_table(Poll)
            .with_table(PollVote)
            .with_table(Notification)
            .with_table(Activity)
            .with_index(drive_import_index())
            .with_index(poll_vote_index())
    }

    /// Opens the database and creates every configured table.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Context with the schema in place
    /// - `Err(TestError::Database)` - Connecting or creating a table failed
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new();

        setup.with_tables(self.tables).await?;
        setup.with_indexes(self.indexes).await?;

        Ok(setup)
    }
}

/// One import per Drive file and uploader, matching the migration.
fn drive_import_index() -> IndexCreateStatement {
    Index::create()
        .name("uq_document_uploader_drive_file")
        .table(Document)
        .col(entity::document::Column::UploadedBy)
        .col(entity::document::Column::DriveFileId)
        .unique()
        .to_owned()
}

/// One vote per poll and user, matching the migration.
fn poll_vote_index() -> IndexCreateStatement {
    Index::create()
        .name("uq_poll_vote_poll_user")
        .table(PollVote)
        .col(entity::poll_vote::Column::PollId)
        .col(entity::poll_vote::Column::UserId)
        .unique()
        .to_owned()
}
