use crate::{model::auth::TokenDto, server::model::user::User};

/// Google account details taken from a verified ID token.
#[derive(Debug, Clone, PartialEq)]
pub struct GoogleIdentity {
    pub google_id: String,
    pub email: String,
    pub name: String,
    pub avatar: Option<String>,
}

#[derive(Debug, Clone)]
pub struct RegisterParams {
    pub name: String,
    pub email: String,
    pub password: String,
    pub department: Option<String>,
    pub role: entity::user::UserRole,
}

/// Signed access token plus the user it was issued for.
#[derive(Debug, Clone)]
pub struct AuthSession {
    pub token: String,
    pub user: User,
}

impl AuthSession {
    pub fn into_dto(self) -> TokenDto {
        TokenDto {
            token: self.token,
            user: self.user.into_dto(),
        }
    }
}
