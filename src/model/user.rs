use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, ToSchema, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub enum RoleDto {
    Admin,
    Teacher,
    Student,
}

#[derive(Serialize, Deserialize, ToSchema, Clone, Debug)]
pub struct UserDto {
    /// Numeric id rendered as a string.
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: RoleDto,
    pub avatar: Option<String>,
    pub department: Option<String>,
}

#[derive(Deserialize, ToSchema)]
pub struct UpdateProfileDto {
    pub name: Option<String>,
    pub department: Option<String>,
}
