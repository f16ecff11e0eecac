use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    model::{catalogue::PlanetDto, favorite::FavoriteKind},
    server::{
        data::{favorite::FavoriteRepository, planet::PlanetRepository},
        error::{resource::ResourceError, Error},
        model::{input::PlanetFields, resource::Resource},
        service::{conflict_on_unique, not_found},
    },
};

pub struct PlanetService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PlanetService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn list(&self) -> Result<Vec<PlanetDto>, Error> {
        let planets = PlanetRepository::new(self.db).get_all().await?;

        Ok(planets.into_iter().map(PlanetDto::from).collect())
    }

    pub async fn get(&self, planet_id: i32) -> Result<PlanetDto, Error> {
        PlanetRepository::new(self.db)
            .get_by_id(planet_id)
            .await?
            .map(PlanetDto::from)
            .ok_or_else(|| not_found(Resource::Planet, planet_id))
    }

    /// Creates a planet unless one with the same name exists
    pub async fn create(&self, fields: PlanetFields) -> Result<PlanetDto, Error> {
        let txn = self.db.begin().await?;
        let planet_repo = PlanetRepository::new(&txn);

        if planet_repo.find_by_name(&fields.name, None).await?.is_some() {
            return Err(ResourceError::Conflict(Resource::Planet).into());
        }

        let planet = planet_repo
            .create(fields)
            .await
            .map_err(|e| conflict_on_unique(e, Resource::Planet))?;

        txn.commit().await?;

        Ok(planet.into())
    }

    /// Replaces every field of an existing planet
    ///
    /// # Returns
    /// - `Ok(PlanetDto)` - The updated planet
    /// - `Err(Error::ResourceError(ResourceError::NotFound))` - No planet with that ID
    /// - `Err(Error::ResourceError(ResourceError::Conflict))` - Name held by another planet
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn update(&self, planet_id: i32, fields: PlanetFields) -> Result<PlanetDto, Error> {
        let txn = self.db.begin().await?;
        let planet_repo = PlanetRepository::new(&txn);

        let Some(planet) = planet_repo.get_by_id(planet_id).await? else {
            return Err(not_found(Resource::Planet, planet_id));
        };

        if planet_repo
            .find_by_name(&fields.name, Some(planet_id))
            .await?
            .is_some()
        {
            return Err(ResourceError::Conflict(Resource::Planet).into());
        }

        let planet = planet_repo
            .update(planet, fields)
            .await
            .map_err(|e| conflict_on_unique(e, Resource::Planet))?;

        txn.commit().await?;

        Ok(planet.into())
    }

    /// Deletes a planet and every favorite pointing at it
    ///
    /// People keep their `planet_id`, homeworlds are not validated.
    pub async fn delete(&self, planet_id: i32) -> Result<(), Error> {
        let txn = self.db.begin().await?;

        FavoriteRepository::new(&txn)
            .delete_by_target(FavoriteKind::Planet, planet_id)
            .await?;
        let result = PlanetRepository::new(&txn).delete(planet_id).await?;

        if result.rows_affected == 0 {
            return Err(not_found(Resource::Planet, planet_id));
        }

        txn.commit().await?;

        Ok(())
    }
}
