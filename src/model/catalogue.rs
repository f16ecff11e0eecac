//! Planets, people and vehicles of the catalogue.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PlanetDto {
    pub id: i32,
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

/// Body of `POST /planets` and `PUT /planets/{id}`, every field is required
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct PlanetPayload {
    pub name: Option<String>,
    pub diameter: Option<i32>,
    pub rotation_period: Option<i32>,
    pub orbital_period: Option<i32>,
    pub gravity: Option<String>,
    pub population: Option<i64>,
    pub climate: Option<String>,
    pub terrain: Option<String>,
    pub surface_water: Option<i32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PersonDto {
    pub id: i32,
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

/// Body of `POST /people` and `PUT /people/{id}`, every field except `planet_id` is required
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct PersonPayload {
    pub name: Option<String>,
    pub height: Option<i32>,
    pub mass: Option<i32>,
    pub hair_color: Option<String>,
    pub skin_color: Option<String>,
    pub eye_color: Option<String>,
    pub birth_year: Option<String>,
    pub gender: Option<String>,
    pub planet_id: Option<i32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct VehicleDto {
    pub id: i32,
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

/// Body of `POST /vehicles` and `PUT /vehicles/{id}`, every field is required
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct VehiclePayload {
    pub name: Option<String>,
    pub model: Option<String>,
    pub vehicle_class: Option<String>,
    pub manufacturer: Option<String>,
    pub cost_in_credits: Option<i64>,
    pub length: Option<f64>,
    pub crew: Option<i32>,
    pub passengers: Option<i32>,
    pub max_atmospheric_speed: Option<i32>,
    pub cargo_capacity: Option<i64>,
    pub consumables: Option<String>,
}
