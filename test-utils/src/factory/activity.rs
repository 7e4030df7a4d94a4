//! Activity log factory.

use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Inserts a `create` activity entry with the given title and timestamp.
pub async fn create_activity(
    db: &DatabaseConnection,
    title: impl Into<String>,
    timestamp: DateTime<Utc>,
) -> Result<entity::activity::Model, DbErr> {
    entity::activity::ActiveModel {
        title: ActiveValue::Set(title.into()),
        author: ActiveValue::Set("Test".to_string()),
        action_type: ActiveValue::Set("create".to_string()),
        entity_type: ActiveValue::Set(None),
        entity_id: ActiveValue::Set(None),
        timestamp: ActiveValue::Set(timestamp),
        ..Default::default()
    }
    .insert(db)
    .await
}
