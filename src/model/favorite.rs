use std::{fmt, str::FromStr};

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Catalogue table a favorite points into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum FavoriteKind {
    Planet,
    People,
    Vehicle,
}

impl FavoriteKind {
    /// Path segment and serialized form, e.g. `planet`
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Planet => "planet",
            Self::People => "people",
            Self::Vehicle => "vehicle",
        }
    }

    /// Name of the request body field carrying the target ID
    pub fn target_field(&self) -> &'static str {
        match self {
            Self::Planet => "planet_id",
            Self::People => "people_id",
            Self::Vehicle => "vehicle_id",
        }
    }

    /// Spanish noun used in response messages
    pub fn noun(&self) -> &'static str {
        match self {
            Self::Planet => "planeta",
            Self::People => "personaje",
            Self::Vehicle => "vehiculo",
        }
    }
}

impl fmt::Display for FavoriteKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FavoriteKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "planet" => Ok(Self::Planet),
            "people" => Ok(Self::People),
            "vehicle" => Ok(Self::Vehicle),
            other => Err(other.to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct FavoriteDto {
    pub id: i32,
    pub user_id: i32,
    pub kind: FavoriteKind,
    pub target_id: i32,
    pub created_at: NaiveDateTime,
}

/// Body of `POST/DELETE /users/{id}/favorite/{kind}`
///
/// Only the field matching the path's kind is read.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct FavoriteTargetPayload {
    pub planet_id: Option<i32>,
    pub people_id: Option<i32>,
    pub vehicle_id: Option<i32>,
}

impl FavoriteTargetPayload {
    pub fn target_id(&self, kind: FavoriteKind) -> Option<i32> {
        match kind {
            FavoriteKind::Planet => self.planet_id,
            FavoriteKind::People => self.people_id,
            FavoriteKind::Vehicle => self.vehicle_id,
        }
    }
}
