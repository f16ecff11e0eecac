//! Validated service inputs.
//!
//! Request bodies deserialize into all-optional payloads so a missing field never aborts
//! extraction. Converting a payload into one of these types checks every required field at
//! once and reports all of the missing ones in a single [`ValidationError::MissingFields`].

use crate::{
    model::{
        auth::LoginPayload,
        catalogue::{PersonPayload, PlanetPayload, VehiclePayload},
        user::UserPayload,
    },
    server::error::validation::ValidationError,
};

/// Moves every listed field out of `$payload`, failing with the names of all absent ones.
///
/// Fields listed under `optional` are copied as-is.
macro_rules! require_fields {
    ($payload:expr => $target:ident { $($field:ident),+ $(,)? } $(optional { $($opt:ident),* $(,)? })?) => {{
        let payload = $payload;
        let missing: Vec<&'static str> = [$((stringify!($field), payload.$field.is_none())),+]
            .into_iter()
            .filter(|(_, is_missing)| *is_missing)
            .map(|(name, _)| name)
            .collect();

        match ($(payload.$field,)+) {
            ($(Some($field),)+) => Ok($target {
                $($field,)+
                $($($opt: payload.$opt,)*)?
            }),
            _ => Err(ValidationError::MissingFields(missing)),
        }
    }};
}

#[derive(Debug, Clone, PartialEq)]
pub struct UserFields {
    pub username: String,
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
}

impl TryFrom<UserPayload> for UserFields {
    type Error = ValidationError;

    fn try_from(payload: UserPayload) -> Result<Self, Self::Error> {
        require_fields!(payload => UserFields {
            username,
            email,
            password,
            first_name,
            last_name,
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl TryFrom<LoginPayload> for Credentials {
    type Error = ValidationError;

    fn try_from(payload: LoginPayload) -> Result<Self, Self::Error> {
        require_fields!(payload => Credentials { username, password })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlanetFields {
    pub name: String,
    pub diameter: i32,
    pub rotation_period: i32,
    pub orbital_period: i32,
    pub gravity: String,
    pub population: i64,
    pub climate: String,
    pub terrain: String,
    pub surface_water: i32,
}

impl TryFrom<PlanetPayload> for PlanetFields {
    type Error = ValidationError;

    fn try_from(payload: PlanetPayload) -> Result<Self, Self::Error> {
        require_fields!(payload => PlanetFields {
            name,
            diameter,
            rotation_period,
            orbital_period,
            gravity,
            population,
            climate,
            terrain,
            surface_water,
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PersonFields {
    pub name: String,
    pub height: i32,
    pub mass: i32,
    pub hair_color: String,
    pub skin_color: String,
    pub eye_color: String,
    pub birth_year: String,
    pub gender: String,
    pub planet_id: Option<i32>,
}

impl TryFrom<PersonPayload> for PersonFields {
    type Error = ValidationError;

    fn try_from(payload: PersonPayload) -> Result<Self, Self::Error> {
        require_fields!(payload => PersonFields {
            name,
            height,
            mass,
            hair_color,
            skin_color,
            eye_color,
            birth_year,
            gender,
        } optional { planet_id })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct VehicleFields {
    pub name: String,
    pub model: String,
    pub vehicle_class: String,
    pub manufacturer: String,
    pub cost_in_credits: i64,
    pub length: f64,
    pub crew: i32,
    pub passengers: i32,
    pub max_atmospheric_speed: i32,
    pub cargo_capacity: i64,
    pub consumables: String,
}

impl TryFrom<VehiclePayload> for VehicleFields {
    type Error = ValidationError;

    fn try_from(payload: VehiclePayload) -> Result<Self, Self::Error> {
        require_fields!(payload => VehicleFields {
            name,
            model,
            vehicle_class,
            manufacturer,
            cost_in_credits,
            length,
            crew,
            passengers,
            max_atmospheric_speed,
            cargo_capacity,
            consumables,
        })
    }
}
