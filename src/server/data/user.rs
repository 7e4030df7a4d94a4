use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};

use crate::server::model::user::{CreateUserParams, UpdateProfileParams, User, UserFilter};

pub struct UserRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: CreateUserParams) -> Result<User, DbErr> {
        let now = Utc::now();
        let user = entity::user::ActiveModel {
            email: ActiveValue::Set(params.email),
            name: ActiveValue::Set(params.name),
            hashed_password: ActiveValue::Set(params.hashed_password),
            role: ActiveValue::Set(params.role),
            avatar: ActiveValue::Set(params.avatar),
            department: ActiveValue::Set(params.department),
            google_id: ActiveValue::Set(params.google_id),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(User::from_entity(user))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<User>, DbErr> {
        let user = entity::prelude::User::find_by_id(id).one(self.db).await?;

        Ok(user.map(User::from_entity))
    }

    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>, DbErr> {
        let user = entity::prelude::User::find()
            .filter(entity::user::Column::Email.eq(email))
            .one(self.db)
            .await?;

        Ok(user.map(User::from_entity))
    }

    pub async fn find_by_google_id(&self, google_id: &str) -> Result<Option<User>, DbErr> {
        let user = entity::prelude::User::find()
            .filter(entity::user::Column::GoogleId.eq(google_id))
            .one(self.db)
            .await?;

        Ok(user.map(User::from_entity))
    }

    /// Attaches a Google account to an existing user.
    ///
    /// The avatar is only filled in when the user has none yet.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - Updated user
    /// - `Ok(None)` - No user with that id
    pub async fn link_google_account(
        &self,
        id: i32,
        google_id: String,
        avatar: Option<String>,
    ) -> Result<Option<User>, DbErr> {
        let Some(user) = entity::prelude::User::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let keep_avatar = user.avatar.as_deref().is_some_and(|a| !a.is_empty());
        let mut active: entity::user::ActiveModel = user.into();
        active.google_id = ActiveValue::Set(Some(google_id));
        if !keep_avatar && avatar.is_some() {
            active.avatar = ActiveValue::Set(avatar);
        }
        active.updated_at = ActiveValue::Set(Utc::now());

        let user = active.update(self.db).await?;

        Ok(Some(User::from_entity(user)))
    }

    /// Applies the provided profile fields and bumps `updated_at`.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - Updated user
    /// - `Ok(None)` - No user with that id
    pub async fn update_profile(
        &self,
        id: i32,
        params: UpdateProfileParams,
    ) -> Result<Option<User>, DbErr> {
        let Some(user) = entity::prelude::User::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active: entity::user::ActiveModel = user.into();
        if let Some(name) = params.name {
            active.name = ActiveValue::Set(name);
        }
        if let Some(department) = params.department {
            active.department = ActiveValue::Set(Some(department));
        }
        active.updated_at = ActiveValue::Set(Utc::now());

        let user = active.update(self.db).await?;

        Ok(Some(User::from_entity(user)))
    }

    /// Users ordered by id, optionally restricted to one department.
    pub async fn get_all(&self, filter: &UserFilter) -> Result<Vec<User>, DbErr> {
        let mut query = entity::prelude::User::find();

        if let Some(department) = &filter.department {
            query = query.filter(entity::user::Column::Department.eq(department.as_str()));
        }

        let users = query
            .order_by_asc(entity::user::Column::Id)
            .offset(filter.page.skip)
            .limit(filter.page.limit)
            .all(self.db)
            .await?;

        Ok(users.into_iter().map(User::from_entity).collect())
    }

    pub async fn get_all_ids(&self) -> Result<Vec<i32>, DbErr> {
        entity::prelude::User::find()
            .select_only()
            .column(entity::user::Column::Id)
            .order_by_asc(entity::user::Column::Id)
            .into_tuple::<i32>()
            .all(self.db)
            .await
    }

    /// Returns the ids from `ids` that have no user row.
    pub async fn find_missing_ids(&self, ids: &[i32]) -> Result<Vec<i32>, DbErr> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let existing: Vec<i32> = entity::prelude::User::find()
            .select_only()
            .column(entity::user::Column::Id)
            .filter(entity::user::Column::Id.is_in(ids.iter().copied()))
            .into_tuple::<i32>()
            .all(self.db)
            .await?;

        Ok(ids
            .iter()
            .copied()
            .filter(|id| !existing.contains(id))
            .collect())
    }

    pub async fn count(&self) -> Result<u64, DbErr> {
        entity::prelude::User::find().count(self.db).await
    }

    pub async fn count_created_since(&self, since: DateTime<Utc>) -> Result<u64, DbErr> {
        entity::prelude::User::find()
            .filter(entity::user::Column::CreatedAt.gte(since))
            .count(self.db)
            .await
    }
}
