//! Account registration and login.

pub mod google;
pub mod password;
pub mod token;

use entity::user::UserRole;
use sea_orm::{DatabaseConnection, SqlErr};

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    model::{
        auth::{AuthSession, GoogleIdentity, RegisterParams},
        user::{CreateUserParams, User},
    },
    service::auth::{
        password::{hash_password, verify_password},
        token::TokenService,
    },
};

pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
    tokens: &'a TokenService,
}

impl<'a> AuthService<'a> {
    pub fn new(db: &'a DatabaseConnection, tokens: &'a TokenService) -> Self {
        Self { db, tokens }
    }

    /// Creates a password account.
    ///
    /// # Returns
    /// - `Ok(User)` - Newly created user
    /// - `Err(AuthError::EmailAlreadyRegistered)` - Email already has an account
    pub async fn register(&self, params: RegisterParams) -> Result<User, AppError> {
        let repo = UserRepository::new(self.db);

        if repo.find_by_email(&params.email).await?.is_some() {
            return Err(AuthError::EmailAlreadyRegistered.into());
        }

        let hashed_password = hash_password(&params.password).await?;

        let result = repo
            .create(CreateUserParams {
                email: params.email,
                name: params.name,
                hashed_password: Some(hashed_password),
                role: params.role,
                avatar: None,
                department: params.department,
                google_id: None,
            })
            .await;

        match result {
            Ok(user) => {
                tracing::info!("Registered user {} ({})", user.id, user.email);
                Ok(user)
            }
            Err(err) if matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) => {
                Err(AuthError::EmailAlreadyRegistered.into())
            }
            Err(err) => Err(err.into()),
        }
    }

    /// Checks email and password, then issues a token.
    ///
    /// Unknown emails, Google-only accounts and wrong passwords all fail the same way.
    pub async fn login(&self, email: &str, password: &str) -> Result<AuthSession, AppError> {
        let repo = UserRepository::new(self.db);

        let Some(user) = repo.find_by_email(email).await? else {
            return Err(AuthError::InvalidCredentials.into());
        };

        let Some(hash) = user.hashed_password.as_deref() else {
            return Err(AuthError::InvalidCredentials.into());
        };

        if !verify_password(password, hash).await? {
            return Err(AuthError::InvalidCredentials.into());
        }

        self.session_for(user)
    }

    /// Signs in a verified Google account.
    ///
    /// Resolves the user by Google id first, then links an existing account with the same
    /// email, and otherwise creates a password-less student account.
    pub async fn login_with_google(
        &self,
        identity: GoogleIdentity,
    ) -> Result<AuthSession, AppError> {
        let repo = UserRepository::new(self.db);

        if let Some(user) = repo.find_by_google_id(&identity.google_id).await? {
            return self.session_for(user);
        }

        if let Some(existing) = repo.find_by_email(&identity.email).await? {
            let user = repo
                .link_google_account(existing.id, identity.google_id, identity.avatar)
                .await?
                .ok_or(AuthError::UserNotInDatabase(existing.id))?;

            tracing::info!("Linked Google account to user {}", user.id);
            return self.session_for(user);
        }

        let user = repo
            .create(CreateUserParams {
                email: identity.email,
                name: identity.name,
                hashed_password: None,
                role: UserRole::Student,
                avatar: identity.avatar,
                department: None,
                google_id: Some(identity.google_id),
            })
            .await?;

        tracing::info!("Created user {} from Google sign-in", user.id);
        self.session_for(user)
    }

    fn session_for(&self, user: User) -> Result<AuthSession, AppError> {
        let token = self.tokens.issue(user.id)?;

        Ok(AuthSession { token, user })
    }
}
