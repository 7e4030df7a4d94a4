//! User domain models and parameters.

use chrono::{DateTime, Utc};
use entity::user::UserRole;

use crate::model::user::{RoleDto, UserDto};

use super::page::Page;

/// Account with role and profile fields.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    pub email: String,
    pub name: String,
    /// `None` for accounts created through Google sign-in.
    pub hashed_password: Option<String>,
    pub role: UserRole,
    pub avatar: Option<String>,
    pub department: Option<String>,
    pub google_id: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl User {
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            email: entity.email,
            name: entity.name,
            hashed_password: entity.hashed_password,
            role: entity.role,
            avatar: entity.avatar,
            department: entity.department,
            google_id: entity.google_id,
            created_at: entity.created_at,
        }
    }

    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id.to_string(),
            name: self.name,
            email: self.email,
            role: RoleDto::from(self.role),
            avatar: self.avatar,
            department: self.department,
        }
    }

    pub fn is_admin(&self) -> bool {
        self.role == UserRole::Admin
    }

    /// Name shown in the activity feed for schedule changes: department, else name.
    pub fn department_or_name(&self) -> &str {
        self.department.as_deref().unwrap_or(&self.name)
    }
}

impl From<RoleDto> for UserRole {
    fn from(role: RoleDto) -> Self {
        match role {
            RoleDto::Admin => UserRole::Admin,
            RoleDto::Teacher => UserRole::Teacher,
            RoleDto::Student => UserRole::Student,
        }
    }
}

impl From<UserRole> for RoleDto {
    fn from(role: UserRole) -> Self {
        match role {
            UserRole::Admin => RoleDto::Admin,
            UserRole::Teacher => RoleDto::Teacher,
            UserRole::Student => RoleDto::Student,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateUserParams {
    pub email: String,
    pub name: String,
    pub hashed_password: Option<String>,
    pub role: UserRole,
    pub avatar: Option<String>,
    pub department: Option<String>,
    pub google_id: Option<String>,
}

/// Profile fields a user may change on themselves. `None` leaves the field untouched.
#[derive(Debug, Clone, Default)]
pub struct UpdateProfileParams {
    pub name: Option<String>,
    pub department: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct UserFilter {
    pub department: Option<String>,
    pub page: Page,
}
