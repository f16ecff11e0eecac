//! Database model type aliases.
//!
//! Short names for the SeaORM models of the `entity` crate, plus their conversions into the
//! API's response bodies.

use crate::model::{
    catalogue::{PersonDto, PlanetDto, VehicleDto},
    favorite::{FavoriteDto, FavoriteKind},
    user::UserDto,
};

/// Registered account, `password_hash` holds an argon2 PHC string.
pub type UserModel = entity::user::Model;

pub type PlanetModel = entity::planet::Model;

/// `planet_id` is the homeworld and may point at a planet that does not exist.
pub type PersonModel = entity::person::Model;

pub type VehicleModel = entity::vehicle::Model;

/// A `(user_id, kind, target_id)` bookmark, unique per triple.
pub type FavoriteModel = entity::favorite::Model;

impl From<UserModel> for UserDto {
    fn from(user: UserModel) -> Self {
        Self {
            id: user.id,
            username: user.username,
            email: user.email,
            first_name: user.first_name,
            last_name: user.last_name,
        }
    }
}

impl From<PlanetModel> for PlanetDto {
    fn from(planet: PlanetModel) -> Self {
        Self {
            id: planet.id,
            name: planet.name,
            diameter: planet.diameter,
            rotation_period: planet.rotation_period,
            orbital_period: planet.orbital_period,
            gravity: planet.gravity,
            population: planet.population,
            climate: planet.climate,
            terrain: planet.terrain,
            surface_water: planet.surface_water,
        }
    }
}

impl From<PersonModel> for PersonDto {
    fn from(person: PersonModel) -> Self {
        Self {
            id: person.id,
            name: person.name,
            height: person.height,
            mass: person.mass,
            hair_color: person.hair_color,
            skin_color: person.skin_color,
            eye_color: person.eye_color,
            birth_year: person.birth_year,
            gender: person.gender,
            planet_id: person.planet_id,
        }
    }
}

impl From<VehicleModel> for VehicleDto {
    fn from(vehicle: VehicleModel) -> Self {
        Self {
            id: vehicle.id,
            name: vehicle.name,
            model: vehicle.model,
            vehicle_class: vehicle.vehicle_class,
            manufacturer: vehicle.manufacturer,
            cost_in_credits: vehicle.cost_in_credits,
            length: vehicle.length,
            crew: vehicle.crew,
            passengers: vehicle.passengers,
            max_atmospheric_speed: vehicle.max_atmospheric_speed,
            cargo_capacity: vehicle.cargo_capacity,
            consumables: vehicle.consumables,
        }
    }
}

impl From<FavoriteModel> for FavoriteDto {
    fn from(favorite: FavoriteModel) -> Self {
        Self {
            id: favorite.id,
            user_id: favorite.user_id,
            kind: favorite.kind.into(),
            target_id: favorite.target_id,
            created_at: favorite.created_at,
        }
    }
}

impl From<FavoriteKind> for entity::favorite::FavoriteKind {
    fn from(kind: FavoriteKind) -> Self {
        match kind {
            FavoriteKind::Planet => Self::Planet,
            FavoriteKind::People => Self::People,
            FavoriteKind::Vehicle => Self::Vehicle,
        }
    }
}

impl From<entity::favorite::FavoriteKind> for FavoriteKind {
    fn from(kind: entity::favorite::FavoriteKind) -> Self {
        match kind {
            entity::favorite::FavoriteKind::Planet => Self::Planet,
            entity::favorite::FavoriteKind::People => Self::People,
            entity::favorite::FavoriteKind::Vehicle => Self::Vehicle,
        }
    }
}
