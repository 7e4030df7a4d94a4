use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use super::user::{RoleDto, UserDto};

#[derive(Deserialize, Validate, ToSchema)]
pub struct RegisterDto {
    pub name: String,
    #[validate(email)]
    pub email: String,
    pub password: String,
    pub department: Option<String>,
    /// Defaults to `STUDENT`.
    pub role: Option<RoleDto>,
}

#[derive(Deserialize, Validate, ToSchema)]
pub struct LoginDto {
    #[validate(email)]
    pub email: String,
    pub password: String,
}

#[derive(Deserialize, ToSchema)]
pub struct GoogleLoginDto {
    /// ID token returned by Google Sign-In on the client.
    #[serde(rename = "idToken")]
    pub id_token: String,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct TokenDto {
    pub token: String,
    pub user: UserDto,
}
