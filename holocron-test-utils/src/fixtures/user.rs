use argon2::{
    password_hash::{rand_core::OsRng, PasswordHasher, SaltString},
    Argon2,
};
use chrono::Utc;
use sea_orm::{ActiveValue, EntityTrait};

use crate::{constant::TEST_PASSWORD, error::TestError, TestContext};

impl TestContext {
    pub fn user<'a>(&'a mut self) -> UserFixtures<'a> {
        UserFixtures { setup: self }
    }
}

pub struct UserFixtures<'a> {
    setup: &'a mut TestContext,
}

impl<'a> UserFixtures<'a> {
    /// Insert a user named `username` with email `{username}@holocron.test`
    ///
    /// The stored hash verifies against [`TEST_PASSWORD`].
    pub async fn insert_user(&self, username: &str) -> Result<entity::user::Model, TestError> {
        let salt = SaltString::generate(&mut OsRng);
        let password_hash = Argon2::default()
            .hash_password(TEST_PASSWORD.as_bytes(), &salt)
            .map_err(|e| TestError::PasswordHash(e.to_string()))?
            .to_string();

        Ok(
            entity::prelude::User::insert(entity::user::ActiveModel {
                username: ActiveValue::Set(username.to_string()),
                email: ActiveValue::Set(format!("{username}@holocron.test")),
                password_hash: ActiveValue::Set(password_hash),
                first_name: ActiveValue::Set("Test".to_string()),
                last_name: ActiveValue::Set("User".to_string()),
                created_at: ActiveValue::Set(Utc::now().naive_utc()),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }
}
