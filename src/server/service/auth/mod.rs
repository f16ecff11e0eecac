//! Authentication service layer.
//!
//! Signup, login and resolving the user behind a verified access token. Password hashing
//! lives in [`password`], token handling in [`token`].

pub mod password;
pub mod token;

#[cfg(test)]
mod tests;

use sea_orm::DatabaseConnection;

use crate::{
    model::{auth::LoginDto, user::UserDto},
    server::{
        data::user::UserRepository,
        error::{auth::AuthError, Error},
        model::input::{Credentials, UserFields},
        service::{
            auth::{password::verify_password, token::JwtKeys},
            user::UserService,
        },
    },
};

pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
    jwt: &'a JwtKeys,
}

impl<'a> AuthService<'a> {
    pub fn new(db: &'a DatabaseConnection, jwt: &'a JwtKeys) -> Self {
        Self { db, jwt }
    }

    /// Registers a new user, identical to [`UserService::create`]
    pub async fn signup(&self, fields: UserFields) -> Result<UserDto, Error> {
        UserService::new(self.db).create(fields).await
    }

    /// Verifies credentials and issues an access token
    ///
    /// # Returns
    /// - `Ok(LoginDto)` - Token and the logged in user
    /// - `Err(Error::AuthError(AuthError::InvalidCredentials))` - Unknown username or wrong password
    /// - `Err(Error::AuthError(AuthError::PasswordHash))` - Stored hash is unreadable
    /// - `Err(Error::DbErr)` - Database query failed
    pub async fn login(&self, credentials: Credentials) -> Result<LoginDto, Error> {
        let Some(user) = UserRepository::new(self.db)
            .get_by_username(&credentials.username)
            .await?
        else {
            return Err(AuthError::InvalidCredentials(credentials.username).into());
        };

        if !verify_password(credentials.password, user.password_hash.clone()).await? {
            return Err(AuthError::InvalidCredentials(credentials.username).into());
        }

        let access_token = self.jwt.issue(user.id)?;

        tracing::debug!(user_id = %user.id, "Issued access token");

        Ok(LoginDto {
            access_token,
            user: user.into(),
        })
    }

    /// Resolves the user a verified token was issued to
    ///
    /// # Returns
    /// - `Ok(UserDto)` - User still exists
    /// - `Err(Error::AuthError(AuthError::UserNotInDatabase))` - User was deleted after the token was issued
    pub async fn current_user(&self, user_id: i32) -> Result<UserDto, Error> {
        UserRepository::new(self.db)
            .get_by_id(user_id)
            .await?
            .map(UserDto::from)
            .ok_or_else(|| AuthError::UserNotInDatabase(user_id).into())
    }
}
