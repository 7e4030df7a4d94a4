use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, EntityTrait, QueryOrder, QuerySelect,
};

use crate::server::model::activity::{Activity, LogActivityParams};

pub struct ActivityRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ActivityRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn log(&self, params: LogActivityParams) -> Result<Activity, DbErr> {
        let activity = entity::activity::ActiveModel {
            title: ActiveValue::Set(params.title),
            author: ActiveValue::Set(params.author),
            action_type: ActiveValue::Set(params.action.as_str().to_string()),
            entity_type: ActiveValue::Set(Some(params.entity_type.to_string())),
            entity_id: ActiveValue::Set(Some(params.entity_id)),
            timestamp: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Activity::from_entity(activity))
    }

    /// Newest entries first.
    pub async fn get_recent(&self, limit: u64) -> Result<Vec<Activity>, DbErr> {
        let activities = entity::prelude::Activity::find()
            .order_by_desc(entity::activity::Column::Timestamp)
            .order_by_desc(entity::activity::Column::Id)
            .limit(limit)
            .all(self.db)
            .await?;

        Ok(activities.into_iter().map(Activity::from_entity).collect())
    }
}
