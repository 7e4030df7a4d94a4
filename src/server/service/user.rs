use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    model::user::{UpdateProfileParams, User, UserFilter},
};

pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<User>, AppError> {
        Ok(UserRepository::new(self.db).find_by_id(id).await?)
    }

    pub async fn get_all(&self, filter: UserFilter) -> Result<Vec<User>, AppError> {
        Ok(UserRepository::new(self.db).get_all(&filter).await?)
    }

    /// Updates the caller's own profile.
    pub async fn update_profile(
        &self,
        user_id: i32,
        params: UpdateProfileParams,
    ) -> Result<User, AppError> {
        UserRepository::new(self.db)
            .update_profile(user_id, params)
            .await?
            .ok_or_else(|| AuthError::UserNotInDatabase(user_id).into())
    }
}
