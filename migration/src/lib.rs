pub use sea_orm_migration::prelude::*;

mod m20260101_000001_create_user_table;
mod m20260101_000002_create_schedule_table;
mod m20260101_000003_create_document_table;
mod m20260101_000004_create_document_share_table;
mod m20260101_000005_create_poll_table;
mod m20260101_000006_create_poll_vote_table;
mod m20260101_000007_create_notification_table;
mod m20260101_000008_create_activity_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260101_000001_create_user_table::Migration),
            Box::new(m20260101_000002_create_schedule_table::Migration),
            Box::new(m20260101_000003_create_document_table::Migration),
            Box::new(m20260101_000004_create_document_share_table::Migration),
            Box::new(m20260101_000005_create_poll_table::Migration),
            Box::new(m20260101_000006_create_poll_vote_table::Migration),
            Box::new(m20260101_000007_create_notification_table::Migration),
            Box::new(m20260101_000008_create_activity_table::Migration),
        ]
    }
}
