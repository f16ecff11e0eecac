use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    IntoActiveModel, QueryFilter, QueryOrder,
};

use crate::server::model::{db::PlanetModel, input::PlanetFields};

pub struct PlanetRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> PlanetRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, fields: PlanetFields) -> Result<PlanetModel, DbErr> {
        let planet = entity::planet::ActiveModel {
            name: ActiveValue::Set(fields.name),
            diameter: ActiveValue::Set(fields.diameter),
            rotation_period: ActiveValue::Set(fields.rotation_period),
            orbital_period: ActiveValue::Set(fields.orbital_period),
            gravity: ActiveValue::Set(fields.gravity),
            population: ActiveValue::Set(fields.population),
            climate: ActiveValue::Set(fields.climate),
            terrain: ActiveValue::Set(fields.terrain),
            surface_water: ActiveValue::Set(fields.surface_water),
            ..Default::default()
        };

        planet.insert(self.db).await
    }

    pub async fn get_all(&self) -> Result<Vec<PlanetModel>, DbErr> {
        entity::prelude::Planet::find()
            .order_by_asc(entity::planet::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn get_by_id(&self, planet_id: i32) -> Result<Option<PlanetModel>, DbErr> {
        entity::prelude::Planet::find_by_id(planet_id)
            .one(self.db)
            .await
    }

    /// Finds the planet named `name`, ignoring `exclude_id` when provided
    pub async fn find_by_name(
        &self,
        name: &str,
        exclude_id: Option<i32>,
    ) -> Result<Option<PlanetModel>, DbErr> {
        let mut query =
            entity::prelude::Planet::find().filter(entity::planet::Column::Name.eq(name));

        if let Some(planet_id) = exclude_id {
            query = query.filter(entity::planet::Column::Id.ne(planet_id));
        }

        query.one(self.db).await
    }

    /// Replaces every mutable field of `planet`
    pub async fn update(
        &self,
        planet: PlanetModel,
        fields: PlanetFields,
    ) -> Result<PlanetModel, DbErr> {
        let mut planet_am = planet.into_active_model();
        planet_am.name = ActiveValue::Set(fields.name);
        planet_am.diameter = ActiveValue::Set(fields.diameter);
        planet_am.rotation_period = ActiveValue::Set(fields.rotation_period);
        planet_am.orbital_period = ActiveValue::Set(fields.orbital_period);
        planet_am.gravity = ActiveValue::Set(fields.gravity);
        planet_am.population = ActiveValue::Set(fields.population);
        planet_am.climate = ActiveValue::Set(fields.climate);
        planet_am.terrain = ActiveValue::Set(fields.terrain);
        planet_am.surface_water = ActiveValue::Set(fields.surface_water);

        planet_am.update(self.db).await
    }

    /// Deletes a planet
    ///
    /// Returns OK regardless of the planet existing, check [`DeleteResult::rows_affected`].
    pub async fn delete(&self, planet_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Planet::delete_by_id(planet_id)
            .exec(self.db)
            .await
    }
}
