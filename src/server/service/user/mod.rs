//! User account management.
//!
//! Also backs `POST /signup`, which is the same operation as `POST /users`.


use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    model::user::UserDto,
    server::{
        data::{favorite::FavoriteRepository, user::UserRepository},
        error::{resource::ResourceError, Error},
        model::{input::UserFields, resource::Resource},
        service::{auth::password::hash_password, conflict_on_unique, not_found},
    },
};

pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    /// Creates a new instance of [`UserService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn list(&self) -> Result<Vec<UserDto>, Error> {
        let users = UserRepository::new(self.db).get_all().await?;

        Ok(users.into_iter().map(UserDto::from).collect())
    }

    /// # Returns
    /// - `Ok(UserDto)` - User found
    /// - `Err(Error::ResourceError(ResourceError::NotFound))` - No user with that ID
    /// - `Err(Error::DbErr)` - Database query failed
    pub async fn get(&self, user_id: i32) -> Result<UserDto, Error> {
        UserRepository::new(self.db)
            .get_by_id(user_id)
            .await?
            .map(UserDto::from)
            .ok_or_else(|| not_found(Resource::User, user_id))
    }

    /// Creates a user if neither the username nor the email are in use
    ///
    /// The password is hashed before the transaction is opened.
    ///
    /// # Returns
    /// - `Ok(UserDto)` - The created user
    /// - `Err(Error::ResourceError(ResourceError::Conflict))` - Username or email already taken
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn create(&self, fields: UserFields) -> Result<UserDto, Error> {
        let password_hash = hash_password(fields.password.clone()).await?;

        let txn = self.db.begin().await?;
        let user_repo = UserRepository::new(&txn);

        if user_repo
            .find_conflicting(&fields.username, &fields.email, None)
            .await?
            .is_some()
        {
            return Err(ResourceError::Conflict(Resource::User).into());
        }

        let user = user_repo
            .create(fields, password_hash)
            .await
            .map_err(|e| conflict_on_unique(e, Resource::User))?;

        txn.commit().await?;

        tracing::info!(user_id = %user.id, username = %user.username, "Created user");

        Ok(user.into())
    }

    /// Replaces every field of an existing user, including the password
    ///
    /// # Returns
    /// - `Ok(UserDto)` - The updated user
    /// - `Err(Error::ResourceError(ResourceError::NotFound))` - No user with that ID
    /// - `Err(Error::ResourceError(ResourceError::Conflict))` - Username or email held by another user
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn update(&self, user_id: i32, fields: UserFields) -> Result<UserDto, Error> {
        let password_hash = hash_password(fields.password.clone()).await?;

        let txn = self.db.begin().await?;
        let user_repo = UserRepository::new(&txn);

        let Some(user) = user_repo.get_by_id(user_id).await? else {
            return Err(not_found(Resource::User, user_id));
        };

        if user_repo
            .find_conflicting(&fields.username, &fields.email, Some(user_id))
            .await?
            .is_some()
        {
            return Err(ResourceError::Conflict(Resource::User).into());
        }

        let user = user_repo
            .update(user, fields, password_hash)
            .await
            .map_err(|e| conflict_on_unique(e, Resource::User))?;

        txn.commit().await?;

        Ok(user.into())
    }

    /// Deletes a user along with their favorites
    ///
    /// # Returns
    /// - `Ok(())` - User and favorites deleted
    /// - `Err(Error::ResourceError(ResourceError::NotFound))` - No user with that ID, nothing is deleted
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn delete(&self, user_id: i32) -> Result<(), Error> {
        let txn = self.db.begin().await?;

        let favorites = FavoriteRepository::new(&txn)
            .delete_by_user_id(user_id)
            .await?;
        let result = UserRepository::new(&txn).delete(user_id).await?;

        if result.rows_affected == 0 {
            return Err(not_found(Resource::User, user_id));
        }

        txn.commit().await?;

        tracing::info!(
            user_id = %user_id,
            favorites = %favorites.rows_affected,
            "Deleted user"
        );

        Ok(())
    }
}
