//! Planet, person and vehicle fixtures.
//!
//! Every record is inserted with fixed test values, only the name and (for people)
//! the homeworld vary.

use sea_orm::{ActiveValue, EntityTrait};

use crate::{error::TestError, TestContext};

impl TestContext {
    pub fn catalogue<'a>(&'a mut self) -> CatalogueFixtures<'a> {
        CatalogueFixtures { setup: self }
    }
}

pub struct CatalogueFixtures<'a> {
    setup: &'a mut TestContext,
}

impl<'a> CatalogueFixtures<'a> {
    /// Insert a planet named `name`
    ///
    /// # Returns
    /// - `Ok(entity::planet::Model)` - The created planet
    /// - `Err(TestError::DbErr)` - Insert failed, e.g. the name is already taken
    pub async fn insert_mock_planet(&self, name: &str) -> Result<entity::planet::Model, TestError> {
        Ok(
            entity::prelude::Planet::insert(entity::planet::ActiveModel {
                name: ActiveValue::Set(name.to_string()),
                diameter: ActiveValue::Set(10465),
                rotation_period: ActiveValue::Set(23),
                orbital_period: ActiveValue::Set(304),
                gravity: ActiveValue::Set("1 standard".to_string()),
                population: ActiveValue::Set(200000),
                climate: ActiveValue::Set("arid".to_string()),
                terrain: ActiveValue::Set("desert".to_string()),
                surface_water: ActiveValue::Set(1),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    /// Insert a person named `name` born on `planet_id`
    ///
    /// `planet_id` is stored as given, the planet does not need to exist.
    pub async fn insert_mock_person(
        &self,
        name: &str,
        planet_id: Option<i32>,
    ) -> Result<entity::person::Model, TestError> {
        Ok(
            entity::prelude::Person::insert(entity::person::ActiveModel {
                name: ActiveValue::Set(name.to_string()),
                height: ActiveValue::Set(172),
                mass: ActiveValue::Set(77),
                hair_color: ActiveValue::Set("blond".to_string()),
                skin_color: ActiveValue::Set("fair".to_string()),
                eye_color: ActiveValue::Set("blue".to_string()),
                birth_year: ActiveValue::Set("19BBY".to_string()),
                gender: ActiveValue::Set("male".to_string()),
                planet_id: ActiveValue::Set(planet_id),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    /// Insert a vehicle named `name`
    pub async fn insert_mock_vehicle(
        &self,
        name: &str,
    ) -> Result<entity::vehicle::Model, TestError> {
        Ok(
            entity::prelude::Vehicle::insert(entity::vehicle::ActiveModel {
                name: ActiveValue::Set(name.to_string()),
                model: ActiveValue::Set("Digger Crawler".to_string()),
                vehicle_class: ActiveValue::Set("wheeled".to_string()),
                manufacturer: ActiveValue::Set("Corellia Mining Corporation".to_string()),
                cost_in_credits: ActiveValue::Set(150000),
                length: ActiveValue::Set(36.8),
                crew: ActiveValue::Set(46),
                passengers: ActiveValue::Set(30),
                max_atmospheric_speed: ActiveValue::Set(30),
                cargo_capacity: ActiveValue::Set(50000),
                consumables: ActiveValue::Set("2 months".to_string()),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }
}
