//! Favorite registry.
//!
//! A favorite is the triple `(user_id, kind, target_id)`, present at most once. Adding and
//! removing are symmetric: both require the user and the target to exist, then flip the
//! triple between absent and present.

#[cfg(test)]
mod tests;

use sea_orm::{ConnectionTrait, DatabaseConnection, DbErr, TransactionTrait};

use crate::{
    model::favorite::{FavoriteDto, FavoriteKind},
    server::{
        data::{
            favorite::FavoriteRepository, is_unique_violation, person::PersonRepository,
            planet::PlanetRepository, user::UserRepository, vehicle::VehicleRepository,
        },
        error::{favorite::FavoriteError, Error},
    },
};

pub struct FavoriteService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FavoriteService<'a> {
    /// Creates a new instance of [`FavoriteService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn list_all(&self) -> Result<Vec<FavoriteDto>, Error> {
        let favorites = FavoriteRepository::new(self.db).get_all().await?;

        Ok(favorites.into_iter().map(FavoriteDto::from).collect())
    }

    /// Lists a user's favorites of every kind in insertion order
    ///
    /// # Returns
    /// - `Ok(Vec<FavoriteDto>)` - Favorites of the user, empty if they have none
    /// - `Err(Error::FavoriteError(FavoriteError::UserNotFound))` - No user with that ID
    /// - `Err(Error::DbErr)` - Database query failed
    pub async fn list_for_user(&self, user_id: i32) -> Result<Vec<FavoriteDto>, Error> {
        if UserRepository::new(self.db)
            .get_by_id(user_id)
            .await?
            .is_none()
        {
            return Err(FavoriteError::UserNotFound(user_id).into());
        }

        let favorites = FavoriteRepository::new(self.db)
            .get_many_by_user_id(user_id)
            .await?;

        Ok(favorites.into_iter().map(FavoriteDto::from).collect())
    }

    /// Marks `target_id` of `kind` as a favorite of `user_id`
    ///
    /// # Returns
    /// - `Ok(FavoriteDto)` - The new favorite
    /// - `Err(Error::FavoriteError(FavoriteError::UserNotFound))` - No user with that ID
    /// - `Err(Error::FavoriteError(FavoriteError::TargetNotFound))` - No record of `kind` with that ID
    /// - `Err(Error::FavoriteError(FavoriteError::AlreadyFavorited))` - Triple already present,
    ///   including when a concurrent request inserted it first
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn add(
        &self,
        user_id: i32,
        kind: FavoriteKind,
        target_id: i32,
    ) -> Result<FavoriteDto, Error> {
        let txn = self.db.begin().await?;
        ensure_user_and_target(&txn, user_id, kind, target_id).await?;

        let favorite_repo = FavoriteRepository::new(&txn);

        if favorite_repo.find(user_id, kind, target_id).await?.is_some() {
            return Err(FavoriteError::AlreadyFavorited {
                user_id,
                kind,
                target_id,
            }
            .into());
        }

        let favorite = favorite_repo
            .create(user_id, kind, target_id)
            .await
            .map_err(|e| already_favorited_on_unique(e, user_id, kind, target_id))?;

        txn.commit().await?;

        tracing::debug!(
            user_id = %user_id,
            kind = %kind,
            target_id = %target_id,
            "Added favorite"
        );

        Ok(favorite.into())
    }

    /// Removes `target_id` of `kind` from the favorites of `user_id`
    ///
    /// # Returns
    /// - `Ok(())` - Favorite removed
    /// - `Err(Error::FavoriteError(FavoriteError::UserNotFound))` - No user with that ID
    /// - `Err(Error::FavoriteError(FavoriteError::TargetNotFound))` - No record of `kind` with that ID
    /// - `Err(Error::FavoriteError(FavoriteError::NotFavorited))` - Triple not present
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn remove(
        &self,
        user_id: i32,
        kind: FavoriteKind,
        target_id: i32,
    ) -> Result<(), Error> {
        let txn = self.db.begin().await?;
        ensure_user_and_target(&txn, user_id, kind, target_id).await?;

        let favorite_repo = FavoriteRepository::new(&txn);

        let Some(favorite) = favorite_repo.find(user_id, kind, target_id).await? else {
            return Err(FavoriteError::NotFavorited {
                user_id,
                kind,
                target_id,
            }
            .into());
        };

        favorite_repo.delete(favorite.id).await?;

        txn.commit().await?;

        Ok(())
    }

    /// Deletes a favorite by its own ID
    pub async fn delete(&self, favorite_id: i32) -> Result<(), Error> {
        let result = FavoriteRepository::new(self.db).delete(favorite_id).await?;

        if result.rows_affected == 0 {
            return Err(FavoriteError::NotFound(favorite_id).into());
        }

        Ok(())
    }
}

/// Maps a unique violation on the favorite triple to [`FavoriteError::AlreadyFavorited`]
///
/// Reached when a concurrent request inserts the same triple between the lookup and the insert.
pub(crate) fn already_favorited_on_unique(
    err: DbErr,
    user_id: i32,
    kind: FavoriteKind,
    target_id: i32,
) -> Error {
    if is_unique_violation(&err) {
        FavoriteError::AlreadyFavorited {
            user_id,
            kind,
            target_id,
        }
        .into()
    } else {
        err.into()
    }
}

/// User is checked before the target so a missing user is always reported first
async fn ensure_user_and_target<C: ConnectionTrait>(
    db: &C,
    user_id: i32,
    kind: FavoriteKind,
    target_id: i32,
) -> Result<(), Error> {
    if UserRepository::new(db).get_by_id(user_id).await?.is_none() {
        return Err(FavoriteError::UserNotFound(user_id).into());
    }

    if !target_exists(db, kind, target_id).await? {
        return Err(FavoriteError::TargetNotFound {
            kind,
            id: target_id,
        }
        .into());
    }

    Ok(())
}

async fn target_exists<C: ConnectionTrait>(
    db: &C,
    kind: FavoriteKind,
    target_id: i32,
) -> Result<bool, DbErr> {
    let exists = match kind {
        FavoriteKind::Planet => PlanetRepository::new(db)
            .get_by_id(target_id)
            .await?
            .is_some(),
        FavoriteKind::People => PersonRepository::new(db)
            .get_by_id(target_id)
            .await?
            .is_some(),
        FavoriteKind::Vehicle => VehicleRepository::new(db)
            .get_by_id(target_id)
            .await?
            .is_some(),
    };

    Ok(exists)
}
